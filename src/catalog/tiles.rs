//! The industry tile catalog.
//!
//! Each physical tile is unique: the defs below carry a copy count and
//! [`all_tiles`] expands them into one `TileSpec` per physical tile,
//! assigning ids in definition order (canal tiles first, then rail).

use crate::core::{Era, Industry, Resource, TileId};

/// An industry tile's printed values. Static reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSpec {
    pub id: TileId,
    pub industry: Industry,
    pub era: Era,
    /// 1-2 in the canal era, 3-4 in the rail era.
    pub level: u8,
    /// Base build cost in money.
    pub cost: i64,
    /// Coal units consumed to build.
    pub coal_cost: u32,
    /// Iron units consumed to build.
    pub iron_cost: u32,
    /// Income-track levels gained when the tile flips.
    pub income: u8,
    pub victory_points: u32,
    pub link_victory_points: u32,
    /// Resource units a mine or ironworks adds when built.
    pub produces: Option<(Resource, u32)>,
    /// Beer units required to sell this tile's output.
    pub beer_required: u32,
}

struct TileDef {
    industry: Industry,
    era: Era,
    level: u8,
    copies: u16,
    cost: i64,
    coal_cost: u32,
    iron_cost: u32,
    income: u8,
    victory_points: u32,
    link_victory_points: u32,
    produces: Option<(Resource, u32)>,
    beer_required: u32,
}

macro_rules! tile_def {
    ($ind:ident, $era:ident, $level:expr, x$copies:expr, cost $cost:expr,
     coal $coal:expr, iron $iron:expr, income $income:expr, vp $vp:expr,
     link $link:expr, produces $prod:expr, beer $beer:expr) => {
        TileDef {
            industry: Industry::$ind,
            era: Era::$era,
            level: $level,
            copies: $copies,
            cost: $cost,
            coal_cost: $coal,
            iron_cost: $iron,
            income: $income,
            victory_points: $vp,
            link_victory_points: $link,
            produces: $prod,
            beer_required: $beer,
        }
    };
}

#[rustfmt::skip]
const TILE_DEFS: [TileDef; 20] = [
    // Canal era (levels 1-2)
    tile_def!(Coal, Canal, 1, x 3, cost 5, coal 0, iron 1, income 4, vp 1, link 1, produces Some((Resource::Coal, 2)), beer 0),
    tile_def!(Coal, Canal, 2, x 2, cost 7, coal 0, iron 1, income 7, vp 2, link 1, produces Some((Resource::Coal, 3)), beer 0),
    tile_def!(Iron, Canal, 1, x 2, cost 5, coal 1, iron 0, income 3, vp 3, link 1, produces Some((Resource::Iron, 4)), beer 0),
    tile_def!(Iron, Canal, 2, x 2, cost 7, coal 1, iron 0, income 5, vp 5, link 2, produces Some((Resource::Iron, 4)), beer 0),
    tile_def!(Cotton, Canal, 1, x 3, cost 12, coal 1, iron 0, income 5, vp 5, link 2, produces None, beer 1),
    tile_def!(ManufacturedGoods, Canal, 1, x 2, cost 8, coal 1, iron 1, income 2, vp 5, link 2, produces None, beer 1),
    tile_def!(Pottery, Canal, 1, x 3, cost 5, coal 1, iron 0, income 1, vp 10, link 1, produces None, beer 1),
    tile_def!(Brewery, Canal, 1, x 2, cost 5, coal 1, iron 0, income 4, vp 4, link 1, produces None, beer 0),
    tile_def!(Brewery, Canal, 2, x 2, cost 9, coal 1, iron 0, income 5, vp 5, link 1, produces None, beer 0),
    // Rail era (levels 3-4)
    tile_def!(Coal, Rail, 3, x 2, cost 8, coal 0, iron 2, income 6, vp 3, link 2, produces Some((Resource::Coal, 4)), beer 0),
    tile_def!(Coal, Rail, 4, x 1, cost 10, coal 0, iron 2, income 8, vp 4, link 2, produces Some((Resource::Coal, 5)), beer 0),
    tile_def!(Iron, Rail, 3, x 2, cost 7, coal 1, iron 0, income 6, vp 7, link 3, produces Some((Resource::Iron, 5)), beer 0),
    tile_def!(Iron, Rail, 4, x 1, cost 9, coal 1, iron 0, income 7, vp 9, link 3, produces Some((Resource::Iron, 6)), beer 0),
    tile_def!(Cotton, Rail, 3, x 2, cost 16, coal 1, iron 1, income 8, vp 12, link 3, produces None, beer 1),
    tile_def!(Cotton, Rail, 4, x 1, cost 20, coal 1, iron 1, income 10, vp 15, link 4, produces None, beer 1),
    tile_def!(ManufacturedGoods, Rail, 3, x 2, cost 12, coal 1, iron 1, income 4, vp 11, link 3, produces None, beer 1),
    tile_def!(ManufacturedGoods, Rail, 4, x 1, cost 16, coal 1, iron 1, income 5, vp 17, link 4, produces None, beer 1),
    tile_def!(Pottery, Rail, 3, x 2, cost 8, coal 2, iron 0, income 2, vp 20, link 2, produces None, beer 1),
    tile_def!(Brewery, Rail, 3, x 2, cost 9, coal 1, iron 1, income 7, vp 7, link 2, produces None, beer 0),
    tile_def!(Brewery, Rail, 4, x 1, cost 12, coal 1, iron 1, income 8, vp 8, link 2, produces None, beer 0),
];

/// Expand the tile defs into the full 38-tile catalog.
#[must_use]
pub fn all_tiles() -> Vec<TileSpec> {
    let mut tiles = Vec::new();
    for def in &TILE_DEFS {
        for _ in 0..def.copies {
            tiles.push(TileSpec {
                id: TileId::new(tiles.len() as u16),
                industry: def.industry,
                era: def.era,
                level: def.level,
                cost: def.cost,
                coal_cost: def.coal_cost,
                iron_cost: def.iron_cost,
                income: def.income,
                victory_points: def.victory_points,
                link_victory_points: def.link_victory_points,
                produces: def.produces,
                beer_required: def.beer_required,
            });
        }
    }
    tiles
}
