//! The board's location catalog.
//!
//! Location ids are indices into [`LOCATIONS`]; the table order is the
//! id assignment and never changes.

use crate::core::{Good, Industry, LocationId};

/// A buildable board location. Static reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub id: LocationId,
    pub name: &'static str,
    /// Industry types buildable here.
    pub allowed: &'static [Industry],
    /// Industry slot capacity.
    pub slots: u8,
    /// External markets reachable from this location.
    pub market_links: &'static [Good],
}

impl Location {
    /// Whether `industry` may be built here.
    #[must_use]
    pub fn allows(&self, industry: Industry) -> bool {
        self.allowed.contains(&industry)
    }

    /// Whether this location links to the external market for `good`.
    #[must_use]
    pub fn links_to(&self, good: Good) -> bool {
        self.market_links.contains(&good)
    }
}

use Good::{Cotton as GCotton, ManufacturedGoods as GGoods, Pottery as GPottery};
use Industry::{Brewery, Coal, Cotton, Iron, ManufacturedGoods, Pottery};

macro_rules! location {
    ($idx:expr, $name:expr, [$($ind:expr),*], $slots:expr, [$($link:expr),*]) => {
        Location {
            id: LocationId::new($idx),
            name: $name,
            allowed: &[$($ind),*],
            slots: $slots,
            market_links: &[$($link),*],
        }
    };
}

/// All 29 board locations.
pub const LOCATIONS: [Location; 29] = [
    location!(0, "Stafford", [Pottery, Brewery], 2, [GPottery]),
    location!(1, "Stone", [Pottery, Brewery], 1, [GPottery]),
    location!(2, "Uttoxeter", [Brewery], 1, []),
    location!(3, "Derby", [Iron, Pottery, Brewery], 2, [GPottery]),
    location!(4, "Cannock", [Coal], 2, []),
    location!(5, "Burton-on-Trent", [Brewery], 2, []),
    location!(6, "Tamworth", [Coal], 1, []),
    location!(7, "Wolverhampton", [Iron, ManufacturedGoods], 2, [GGoods]),
    location!(8, "Walsall", [Iron], 1, []),
    location!(9, "Coalbrookdale", [Coal, Iron], 2, []),
    location!(10, "Birmingham", [Iron, ManufacturedGoods, Brewery], 3, [GGoods]),
    location!(11, "West Bromwich", [Iron], 1, []),
    location!(12, "Kidderminster", [Cotton], 2, [GCotton]),
    location!(13, "Worcester", [Cotton], 1, [GCotton]),
    location!(14, "Droitwich", [Pottery], 1, [GPottery]),
    location!(
        15,
        "Coventry",
        [Cotton, ManufacturedGoods, Pottery],
        3,
        [GCotton, GGoods, GPottery]
    ),
    location!(16, "Nuneaton", [Coal], 2, []),
    location!(17, "Hinckley", [Cotton], 1, [GCotton]),
    location!(18, "Redditch", [ManufacturedGoods], 1, [GGoods]),
    location!(19, "Warwick", [Pottery, Brewery], 2, [GPottery]),
    location!(20, "Leamington", [ManufacturedGoods], 1, [GGoods]),
    location!(21, "Gloucester", [Pottery, Brewery], 2, [GPottery]),
    location!(22, "Oxford", [Brewery], 2, []),
    location!(23, "Dudley", [Coal, Iron], 2, []),
    location!(24, "Stourbridge", [Coal, Iron], 1, []),
    location!(25, "Belper", [Cotton], 1, [GCotton]),
    location!(26, "Market Harborough", [Brewery], 1, []),
    location!(27, "Nottingham", [Cotton, ManufacturedGoods], 2, [GCotton, GGoods]),
    location!(28, "Shrewsbury", [Coal], 1, []),
];
