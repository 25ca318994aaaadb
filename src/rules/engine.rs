//! The engine facade.
//!
//! `Engine` owns the immutable catalog and exposes the full boundary:
//! game construction, the `apply` transition call, and the read-only
//! queries a UI or test harness needs. Single-threaded and
//! turn-serialized; every call either fully applies or has no effect.

use im::Vector;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::catalog::constants::{
    ACTIONS_PER_TURN, STARTING_HAND_SIZE, STARTING_INCOME_LEVEL, STARTING_MONEY,
};
use crate::catalog::{Catalog, TilePools};
use crate::core::{
    Action, ActionKind, ActionRecord, BoardState, CardId, Era, GameRng, GameState, Phase,
    PlayerColor, PlayerId, PlayerMap, PlayerState,
};
use crate::market::{ExternalMarkets, ResourceMarket};

use super::error::{EngineError, Rejection};
use super::{apply, orchestrate, validate};

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSeat {
    pub name: String,
    pub color: PlayerColor,
}

impl PlayerSeat {
    #[must_use]
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Everything needed to start a game.
#[derive(Clone, Debug)]
pub struct GameSetup {
    pub players: Vec<PlayerSeat>,
    /// Drives every shuffle; same setup, same game.
    pub seed: u64,
}

/// Why a game could not be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player count {0} out of range (2-4)")]
    PlayerCount(usize),
    #[error("duplicate player color")]
    DuplicateColor(PlayerColor),
}

/// Outcome of [`Engine::apply`]: the next state, plus the diagnostic if
/// the action did not apply (in which case `state` equals the input).
#[derive(Clone, Debug)]
pub struct ApplyOutcome {
    pub state: GameState,
    pub error: Option<EngineError>,
}

impl ApplyOutcome {
    /// Whether the action was applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.error.is_none()
    }
}

/// The rules engine. Owns the catalog; holds no game state.
#[derive(Clone, Debug)]
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Engine for the standard Birmingham board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Catalog::standard())
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build the initial state for a new game.
    pub fn new_game(&self, setup: &GameSetup) -> Result<GameState, SetupError> {
        let count = setup.players.len();
        if !(2..=4).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }
        for (i, seat) in setup.players.iter().enumerate() {
            if setup.players[..i].iter().any(|s| s.color == seat.color) {
                return Err(SetupError::DuplicateColor(seat.color));
            }
        }

        let mut rng = GameRng::new(setup.seed);
        let mut deck: Vec<CardId> = self.catalog.cards().iter().map(|c| c.id).collect();
        rng.shuffle(&mut deck);

        let players = PlayerMap::new(count, |id| {
            let seat = &setup.players[id.index()];
            let start = id.index() * STARTING_HAND_SIZE;
            let hand: Vector<CardId> =
                deck[start..start + STARTING_HAND_SIZE].iter().copied().collect();
            PlayerState {
                name: seat.name.clone(),
                color: seat.color,
                money: STARTING_MONEY,
                income_level: STARTING_INCOME_LEVEL,
                victory_points: 0,
                hand,
                actions_remaining: ACTIONS_PER_TURN,
                connections: im::HashSet::new(),
                has_loan: false,
            }
        });
        let remaining: Vector<CardId> =
            deck[count * STARTING_HAND_SIZE..].iter().copied().collect();

        debug!(players = count, seed = setup.seed, "new game");

        Ok(GameState {
            players,
            current: PlayerId::new(0),
            phase: Phase::Action,
            era: Era::Canal,
            turn: 1,
            board: BoardState {
                industries: Vector::new(),
                built_connections: im::HashSet::new(),
                pools: TilePools::from_catalog(&self.catalog),
            },
            market: ResourceMarket::for_player_count(count),
            external: ExternalMarkets::for_player_count(count),
            deck: remaining,
            discard: Vector::new(),
            game_ended: false,
            final_scores: None,
            history: Vector::new(),
            rng,
        })
    }

    /// Apply an action, returning the next state.
    ///
    /// On rejection or invariant violation the returned state is the
    /// unchanged input and `error` carries the diagnostic.
    #[must_use]
    pub fn apply(&self, state: &GameState, action: &Action) -> ApplyOutcome {
        if let Err(rejection) = validate::validate(&self.catalog, state, action) {
            warn!(action = %action.kind(), %rejection, "action rejected");
            return ApplyOutcome {
                state: state.clone(),
                error: Some(EngineError::Rule(rejection)),
            };
        }

        let mut next = state.clone();
        let (turn, era) = (next.turn, next.era);
        if let Err(rejection) = apply::dispatch(&self.catalog, &mut next, action) {
            warn!(action = %action.kind(), %rejection, "action rejected in handler");
            return ApplyOutcome {
                state: state.clone(),
                error: Some(EngineError::Rule(rejection)),
            };
        }
        next.history.push_back(ActionRecord {
            action: action.clone(),
            turn,
            era,
        });

        // A corrupted transition never reaches the caller.
        if let Err(violation) = validate::check_invariants(&self.catalog, &next) {
            error!(action = %action.kind(), %violation, "transition discarded");
            return ApplyOutcome {
                state: state.clone(),
                error: Some(EngineError::Invariant(violation)),
            };
        }

        debug!(action = %action.kind(), turn, "action applied");
        orchestrate::run(&self.catalog, &mut next);
        ApplyOutcome {
            state: next,
            error: None,
        }
    }

    /// Legality check without mutation.
    pub fn is_valid(&self, state: &GameState, action: &Action) -> Result<(), Rejection> {
        validate::validate(&self.catalog, state, action)
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self, state: &GameState) -> PlayerId {
        state.current
    }

    /// Look up a player's state.
    #[must_use]
    pub fn player<'a>(&self, state: &'a GameState, id: PlayerId) -> Option<&'a PlayerState> {
        state.players.get(id)
    }

    /// Action kinds a player could plausibly take right now. A coarse
    /// menu for UI affordances; per-action validation still applies.
    #[must_use]
    pub fn available_actions(&self, state: &GameState, player: PlayerId) -> Vec<ActionKind> {
        let Some(p) = state.players.get(player) else {
            return Vec::new();
        };
        if state.current != player || state.game_ended {
            return Vec::new();
        }
        if p.actions_remaining == 0 {
            return vec![ActionKind::Pass];
        }

        let mut actions = vec![ActionKind::Pass];
        if !p.has_loan {
            actions.push(ActionKind::TakeLoan);
        }
        if !p.hand.is_empty() && p.money > 0 {
            actions.push(ActionKind::BuildIndustry);
        }
        if p.money > 0 {
            actions.push(ActionKind::DevelopLocation);
        }
        let can_sell = state.board.industries_of(player).any(|b| {
            !b.flipped
                && self
                    .catalog
                    .tile(b.tile)
                    .is_some_and(|spec| spec.industry.good().is_some())
        });
        if can_sell {
            actions.push(ActionKind::SellGoods);
        }
        actions
    }
}
