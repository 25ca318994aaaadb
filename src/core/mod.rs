//! Core vocabulary: identifiers, enums, players, actions, state, RNG.

pub mod action;
pub mod ids;
pub mod player;
pub mod rng;
pub mod state;
pub mod types;

pub use action::{Action, ActionKind, ActionRecord, ResourcePurchase, SaleRoute};
pub use ids::{CardId, ConnectionId, LocationId, TileId};
pub use player::{PlayerId, PlayerMap, PlayerState};
pub use rng::{GameRng, GameRngState};
pub use state::{BoardState, BuiltIndustry, GameState, ScoreBreakdown};
pub use types::{
    CardKind, ConnectionKind, Era, EraTag, Good, Industry, Phase, PlayerColor, Resource,
};
