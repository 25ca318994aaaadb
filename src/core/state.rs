//! Game state: the single authoritative value the engine transitions.
//!
//! `GameState` is cheap to clone: the bulky collections (industries,
//! hands, deck, history) are `im` persistent structures, so the engine
//! can clone before mutating and a rejected or corrupted transition
//! never touches the state the caller holds.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use crate::catalog::TilePools;
use crate::market::{ExternalMarkets, ResourceMarket};

use super::action::ActionRecord;
use super::ids::{CardId, ConnectionId, LocationId, TileId};
use super::player::{PlayerId, PlayerMap, PlayerState};
use super::rng::GameRng;
use super::types::{Era, Phase};

/// An industry tile placed on the board.
///
/// The tile id doubles as the identity of the built industry; the full
/// spec is looked up in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltIndustry {
    pub tile: TileId,
    pub location: LocationId,
    pub owner: PlayerId,
    /// A brewery's beer has been drawn down this era.
    pub used: bool,
    /// Output sold or consumed this era; cannot sell again.
    pub flipped: bool,
}

impl BuiltIndustry {
    #[must_use]
    pub fn new(tile: TileId, location: LocationId, owner: PlayerId) -> Self {
        Self {
            tile,
            location,
            owner,
            used: false,
            flipped: false,
        }
    }
}

/// Per-player final scoring detail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Sum of owned built tiles' victory points.
    pub industry_points: u32,
    /// Connection points, accumulated at build time.
    pub connection_points: u32,
    /// floor(money / 4).
    pub money_points: u32,
    pub total: u32,
}

/// Shared board state: what has been built and what remains buildable.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardState {
    /// All built industries, in build order. The single source of truth;
    /// per-player views are queries over this list.
    pub industries: Vector<BuiltIndustry>,
    /// Connections built by anyone.
    pub built_connections: ImHashSet<ConnectionId>,
    /// Remaining tile pools by industry and era.
    pub pools: TilePools,
}

impl BoardState {
    /// Industries built at a location.
    pub fn industries_at(&self, location: LocationId) -> impl Iterator<Item = &BuiltIndustry> {
        self.industries.iter().filter(move |b| b.location == location)
    }

    /// Industries owned by a player.
    pub fn industries_of(&self, player: PlayerId) -> impl Iterator<Item = &BuiltIndustry> {
        self.industries.iter().filter(move |b| b.owner == player)
    }

    /// Look up a built industry by its tile id.
    #[must_use]
    pub fn industry(&self, tile: TileId) -> Option<&BuiltIndustry> {
        self.industries.iter().find(|b| b.tile == tile)
    }

    /// Mutable lookup by tile id.
    pub fn industry_mut(&mut self, tile: TileId) -> Option<&mut BuiltIndustry> {
        self.industries.iter_mut().find(|b| b.tile == tile)
    }
}

/// Complete game state.
///
/// Not serialized as a whole; the components that need persistence
/// (players, board pieces, markets) all carry serde derives, and the
/// RNG exposes a serializable snapshot via [`GameRng::state`].
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub players: PlayerMap<PlayerState>,
    /// Whose turn it is.
    pub current: PlayerId,
    pub phase: Phase,
    pub era: Era,
    /// 1-based; reset to 1 on era advance.
    pub turn: u32,
    pub board: BoardState,
    /// Coal and iron markets.
    pub market: ResourceMarket,
    /// Cotton, manufactured goods, and pottery demand.
    pub external: ExternalMarkets,
    pub deck: Vector<CardId>,
    pub discard: Vector<CardId>,
    pub game_ended: bool,
    /// Present only once the game has ended.
    pub final_scores: Option<PlayerMap<ScoreBreakdown>>,
    /// Applied actions, oldest first.
    pub history: Vector<ActionRecord>,
    pub rng: GameRng,
}

impl GameState {
    /// The current player's state.
    #[must_use]
    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current]
    }

    /// Number of players in the game.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Whether every player has spent all actions this turn.
    #[must_use]
    pub fn all_actions_spent(&self) -> bool {
        self.players.iter().all(|(_, p)| p.actions_remaining == 0)
    }
}
