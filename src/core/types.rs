//! Game vocabulary: eras, phases, industries, resources, goods.
//!
//! Everything that the board data keys on is a closed enum, so tile pools
//! and markets can be fixed-shape tables instead of string-keyed maps.

use serde::{Deserialize, Serialize};

use super::ids::LocationId;

/// The two sequential macro-phases of the game. Strictly one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Canal,
    Rail,
}

impl Era {
    pub const COUNT: usize = 2;

    /// Index for era-keyed tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Era::Canal => write!(f, "canal"),
            Era::Rail => write!(f, "rail"),
        }
    }
}

/// Era availability tag for connections and cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EraTag {
    Canal,
    Rail,
    Both,
}

impl EraTag {
    /// Whether something tagged with this is usable in `era`.
    #[must_use]
    pub fn matches(self, era: Era) -> bool {
        match self {
            EraTag::Canal => era == Era::Canal,
            EraTag::Rail => era == Era::Rail,
            EraTag::Both => true,
        }
    }
}

/// Sub-cycle within a turn: action -> income -> market -> action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Action,
    Income,
    Market,
}

/// Industry types buildable on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Coal,
    Iron,
    Cotton,
    ManufacturedGoods,
    Pottery,
    Brewery,
}

impl Industry {
    pub const COUNT: usize = 6;

    pub const ALL: [Industry; Industry::COUNT] = [
        Industry::Coal,
        Industry::Iron,
        Industry::Cotton,
        Industry::ManufacturedGoods,
        Industry::Pottery,
        Industry::Brewery,
    ];

    /// Index for industry-keyed tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Coal and iron mines produce market resources; they never sell goods.
    #[must_use]
    pub fn is_resource_producer(self) -> bool {
        matches!(self, Industry::Coal | Industry::Iron)
    }

    /// The external-market good this industry produces, if any.
    #[must_use]
    pub fn good(self) -> Option<Good> {
        match self {
            Industry::Cotton => Some(Good::Cotton),
            Industry::ManufacturedGoods => Some(Good::ManufacturedGoods),
            Industry::Pottery => Some(Good::Pottery),
            _ => None,
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Industry::Coal => write!(f, "coal"),
            Industry::Iron => write!(f, "iron"),
            Industry::Cotton => write!(f, "cotton"),
            Industry::ManufacturedGoods => write!(f, "manufactured goods"),
            Industry::Pottery => write!(f, "pottery"),
            Industry::Brewery => write!(f, "brewery"),
        }
    }
}

/// Physical resources. Coal and iron trade on the resource market;
/// beer is produced on demand by breweries and never marketed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Coal,
    Iron,
    Beer,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Coal => write!(f, "coal"),
            Resource::Iron => write!(f, "iron"),
            Resource::Beer => write!(f, "beer"),
        }
    }
}

/// Goods sold into the external markets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Good {
    Cotton,
    ManufacturedGoods,
    Pottery,
}

impl Good {
    pub const COUNT: usize = 3;

    pub const ALL: [Good; Good::COUNT] =
        [Good::Cotton, Good::ManufacturedGoods, Good::Pottery];

    /// Index for good-keyed tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Good {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Good::Cotton => write!(f, "cotton"),
            Good::ManufacturedGoods => write!(f, "manufactured goods"),
            Good::Pottery => write!(f, "pottery"),
        }
    }
}

/// Transport connection flavor. Informational; legality is driven by the
/// connection's [`EraTag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionKind {
    Canal,
    Rail,
}

/// What a card names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Permits building at a specific location.
    Location(LocationId),
    /// Permits building a specific industry type.
    Industry(Industry),
    /// Stands in for any location or industry.
    Wild,
}

/// Player seat colors. Unique among the players of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
}
