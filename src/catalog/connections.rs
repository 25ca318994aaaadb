//! The board's connection catalog.
//!
//! Connection ids are indices into [`CONNECTIONS`]. Canal-era links come
//! first, then rail-era links, then the two cross-era links.

use crate::core::{ConnectionId, ConnectionKind, EraTag, LocationId};

/// A buildable transport link between two locations. Static reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    pub id: ConnectionId,
    pub name: &'static str,
    /// Undirected endpoints.
    pub endpoints: [LocationId; 2],
    pub kind: ConnectionKind,
    pub cost: i64,
    pub availability: EraTag,
    /// Credited to the builder immediately.
    pub victory_points: u32,
}

impl Connection {
    /// Whether `location` is one of this connection's endpoints.
    #[must_use]
    pub fn touches(&self, location: LocationId) -> bool {
        self.endpoints[0] == location || self.endpoints[1] == location
    }
}

// Location ids, matching the LOCATIONS table order.
const STAFFORD: LocationId = LocationId::new(0);
const STONE: LocationId = LocationId::new(1);
const UTTOXETER: LocationId = LocationId::new(2);
const DERBY: LocationId = LocationId::new(3);
const CANNOCK: LocationId = LocationId::new(4);
const BURTON: LocationId = LocationId::new(5);
const TAMWORTH: LocationId = LocationId::new(6);
const WOLVERHAMPTON: LocationId = LocationId::new(7);
const WALSALL: LocationId = LocationId::new(8);
const COALBROOKDALE: LocationId = LocationId::new(9);
const BIRMINGHAM: LocationId = LocationId::new(10);
const WEST_BROMWICH: LocationId = LocationId::new(11);
const KIDDERMINSTER: LocationId = LocationId::new(12);
const WORCESTER: LocationId = LocationId::new(13);
const DROITWICH: LocationId = LocationId::new(14);
const COVENTRY: LocationId = LocationId::new(15);
const NUNEATON: LocationId = LocationId::new(16);
const HINCKLEY: LocationId = LocationId::new(17);
const REDDITCH: LocationId = LocationId::new(18);
const WARWICK: LocationId = LocationId::new(19);
const LEAMINGTON: LocationId = LocationId::new(20);
const GLOUCESTER: LocationId = LocationId::new(21);
const OXFORD: LocationId = LocationId::new(22);
const DUDLEY: LocationId = LocationId::new(23);
const STOURBRIDGE: LocationId = LocationId::new(24);
const BELPER: LocationId = LocationId::new(25);
const MARKET_HARBOROUGH: LocationId = LocationId::new(26);
const NOTTINGHAM: LocationId = LocationId::new(27);
const SHREWSBURY: LocationId = LocationId::new(28);

macro_rules! connection {
    ($idx:expr, $name:expr, $a:expr, $b:expr, $kind:ident, $cost:expr, $era:ident, $vp:expr) => {
        Connection {
            id: ConnectionId::new($idx),
            name: $name,
            endpoints: [$a, $b],
            kind: ConnectionKind::$kind,
            cost: $cost,
            availability: EraTag::$era,
            victory_points: $vp,
        }
    };
}

/// All 51 connections: 26 canal, 23 rail, 2 cross-era.
#[rustfmt::skip]
pub const CONNECTIONS: [Connection; 51] = [
    // Canal era
    connection!(0, "Coalbrookdale-Wolverhampton", COALBROOKDALE, WOLVERHAMPTON, Canal, 3, Canal, 1),
    connection!(1, "Wolverhampton-Walsall", WOLVERHAMPTON, WALSALL, Canal, 2, Canal, 1),
    connection!(2, "Walsall-Birmingham", WALSALL, BIRMINGHAM, Canal, 2, Canal, 1),
    connection!(3, "Birmingham-Coventry", BIRMINGHAM, COVENTRY, Canal, 4, Canal, 2),
    connection!(4, "Cannock-Walsall", CANNOCK, WALSALL, Canal, 2, Canal, 1),
    connection!(5, "Stafford-Stone", STAFFORD, STONE, Canal, 2, Canal, 1),
    connection!(6, "Stone-Uttoxeter", STONE, UTTOXETER, Canal, 3, Canal, 1),
    connection!(7, "Uttoxeter-Burton-on-Trent", UTTOXETER, BURTON, Canal, 2, Canal, 1),
    connection!(8, "Burton-on-Trent-Derby", BURTON, DERBY, Canal, 3, Canal, 1),
    connection!(9, "Tamworth-Birmingham", TAMWORTH, BIRMINGHAM, Canal, 3, Canal, 1),
    connection!(10, "Birmingham-Warwick", BIRMINGHAM, WARWICK, Canal, 3, Canal, 1),
    connection!(11, "Warwick-Leamington", WARWICK, LEAMINGTON, Canal, 2, Canal, 1),
    connection!(12, "Birmingham-Worcester", BIRMINGHAM, WORCESTER, Canal, 4, Canal, 2),
    connection!(13, "Worcester-Gloucester", WORCESTER, GLOUCESTER, Canal, 3, Canal, 1),
    connection!(14, "Kidderminster-Worcester", KIDDERMINSTER, WORCESTER, Canal, 2, Canal, 1),
    connection!(15, "Wolverhampton-Kidderminster", WOLVERHAMPTON, KIDDERMINSTER, Canal, 3, Canal, 1),
    connection!(16, "Birmingham-Dudley", BIRMINGHAM, DUDLEY, Canal, 2, Canal, 1),
    connection!(17, "Dudley-Stourbridge", DUDLEY, STOURBRIDGE, Canal, 2, Canal, 1),
    connection!(18, "West Bromwich-Birmingham", WEST_BROMWICH, BIRMINGHAM, Canal, 1, Canal, 1),
    connection!(19, "Coventry-Nuneaton", COVENTRY, NUNEATON, Canal, 3, Canal, 1),
    connection!(20, "Coventry-Hinckley", COVENTRY, HINCKLEY, Canal, 2, Canal, 1),
    connection!(21, "Warwick-Droitwich", WARWICK, DROITWICH, Canal, 3, Canal, 1),
    connection!(22, "Droitwich-Worcester", DROITWICH, WORCESTER, Canal, 2, Canal, 1),
    connection!(23, "Redditch-Warwick", REDDITCH, WARWICK, Canal, 2, Canal, 1),
    connection!(24, "Derby-Belper", DERBY, BELPER, Canal, 2, Canal, 1),
    connection!(25, "Shrewsbury-Coalbrookdale", SHREWSBURY, COALBROOKDALE, Canal, 2, Canal, 1),
    // Rail era
    connection!(26, "Shrewsbury-Wolverhampton", SHREWSBURY, WOLVERHAMPTON, Rail, 5, Rail, 3),
    connection!(27, "Stafford-Wolverhampton", STAFFORD, WOLVERHAMPTON, Rail, 4, Rail, 2),
    connection!(28, "Stafford-Cannock", STAFFORD, CANNOCK, Rail, 3, Rail, 2),
    connection!(29, "Stafford-Tamworth", STAFFORD, TAMWORTH, Rail, 4, Rail, 2),
    connection!(30, "Tamworth-Nuneaton", TAMWORTH, NUNEATON, Rail, 3, Rail, 2),
    connection!(31, "Nuneaton-Coventry", NUNEATON, COVENTRY, Rail, 2, Rail, 1),
    connection!(32, "Coventry-Leamington", COVENTRY, LEAMINGTON, Rail, 3, Rail, 2),
    connection!(33, "Birmingham-Coventry (rail)", BIRMINGHAM, COVENTRY, Rail, 4, Rail, 3),
    connection!(34, "Wolverhampton-Birmingham", WOLVERHAMPTON, BIRMINGHAM, Rail, 3, Rail, 2),
    connection!(35, "Cannock-Birmingham", CANNOCK, BIRMINGHAM, Rail, 4, Rail, 2),
    connection!(36, "Birmingham-Warwick (rail)", BIRMINGHAM, WARWICK, Rail, 3, Rail, 2),
    connection!(37, "Warwick-Oxford", WARWICK, OXFORD, Rail, 6, Rail, 4),
    connection!(38, "Birmingham-Gloucester", BIRMINGHAM, GLOUCESTER, Rail, 5, Rail, 3),
    connection!(39, "Gloucester-Oxford", GLOUCESTER, OXFORD, Rail, 4, Rail, 3),
    connection!(40, "Kidderminster-Birmingham", KIDDERMINSTER, BIRMINGHAM, Rail, 4, Rail, 2),
    connection!(41, "Derby-Nottingham", DERBY, NOTTINGHAM, Rail, 4, Rail, 3),
    connection!(42, "Derby-Tamworth", DERBY, TAMWORTH, Rail, 3, Rail, 2),
    connection!(43, "Burton-on-Trent-Tamworth", BURTON, TAMWORTH, Rail, 2, Rail, 1),
    connection!(44, "Stone-Derby", STONE, DERBY, Rail, 5, Rail, 3),
    connection!(45, "Uttoxeter-Derby", UTTOXETER, DERBY, Rail, 3, Rail, 2),
    connection!(46, "Hinckley-Market Harborough", HINCKLEY, MARKET_HARBOROUGH, Rail, 3, Rail, 2),
    connection!(47, "Coventry-Hinckley (rail)", COVENTRY, HINCKLEY, Rail, 2, Rail, 1),
    connection!(48, "Nuneaton-Hinckley", NUNEATON, HINCKLEY, Rail, 2, Rail, 1),
    // Cross-era
    connection!(49, "Birmingham-Redditch", BIRMINGHAM, REDDITCH, Canal, 3, Both, 2),
    connection!(50, "Worcester-Redditch", WORCESTER, REDDITCH, Canal, 2, Both, 1),
];
