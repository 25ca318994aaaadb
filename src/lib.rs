//! # brassworks
//!
//! A deterministic rules engine for a two-era industrial economy board
//! game: players build industries and transport links on a fixed map,
//! trade coal and iron on a depleting market, brew beer on demand, sell
//! goods into decaying external demand, and score across the canal and
//! rail eras.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One `GameState` value, passed into every call.
//!    No ambient context, no interior mutability.
//!
//! 2. **Atomic Transitions**: An action either fully applies or has no
//!    effect. Rejections return the prior state with a structured
//!    diagnostic; invariant breaks refuse to publish.
//!
//! 3. **Persistent Data Structures**: O(1) cloning via `im`, so the
//!    clone-before-mutate boundary is cheap enough to hold everywhere.
//!
//! 4. **Closed Vocabulary**: Actions, industries, eras, and goods are
//!    enums; reference-data ids are table indices. The compiler, not a
//!    runtime default branch, catches the unhandled case.
//!
//! ## Modules
//!
//! - `core`: ids, enums, players, actions, state, deterministic RNG
//! - `catalog`: immutable reference data and lookup helpers
//! - `market`: resource and external-goods market model
//! - `rules`: validator, transition handlers, orchestrator, engine

pub mod catalog;
pub mod core;
pub mod market;
pub mod rules;

pub use crate::core::{
    Action, ActionKind, ActionRecord, BoardState, BuiltIndustry, CardId, CardKind, ConnectionId,
    Era, GameRng, GameRngState, GameState, Good, Industry, LocationId, Phase, PlayerColor,
    PlayerId, PlayerMap, PlayerState, Resource, ResourcePurchase, SaleRoute, ScoreBreakdown,
    TileId,
};

pub use crate::catalog::{Card, Catalog, Connection, Location, TilePools, TileSpec};

pub use crate::market::{ExternalMarkets, PriceTrack, ResourceMarket};

pub use crate::rules::{
    ApplyOutcome, Engine, EngineError, GameSetup, InvariantViolation, PlayerSeat, RejectReason,
    Rejection, SetupError,
};
