//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. Games run with 2-4 players in fixed
//! turn order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexable
//! by `PlayerId`.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::ids::{CardId, ConnectionId};
use super::types::PlayerColor;

/// Player identifier. Indices are 0-based in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, or `None` if out of range.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, or `None` if out of range.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Everything a single player owns or tracks.
///
/// Built industries live in the board's single authoritative list (see
/// [`BoardState`]); a player's industries are a query over that list,
/// keyed by owner, so a flip can never desynchronize two copies.
///
/// [`BoardState`]: crate::core::state::BoardState
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Display name.
    pub name: String,

    /// Seat color, unique among the game's players.
    pub color: PlayerColor,

    /// Money on hand. Never negative after a published transition.
    pub money: i64,

    /// Index on the income track, not the income amount itself.
    pub income_level: u8,

    /// Victory points accumulated during play (connections score on build).
    pub victory_points: u32,

    /// Cards in hand.
    pub hand: Vector<CardId>,

    /// Actions left this turn.
    pub actions_remaining: u8,

    /// Connections this player has built.
    pub connections: ImHashSet<ConnectionId>,

    /// Whether the player holds the (single, unrepayable) loan.
    pub has_loan: bool,
}
