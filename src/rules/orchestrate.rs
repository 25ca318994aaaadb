//! Automatic phase/era/game-end sequencing.
//!
//! After every successfully applied action the engine runs one pass of
//! the checks below, in fixed priority order, so concurrent-looking
//! transitions can never apply inconsistently. Each forced transition
//! goes through the same handlers as a player action.

use tracing::{error, warn};

use crate::catalog::constants::CANAL_TURN_LIMIT;
use crate::catalog::Catalog;
use crate::core::{Action, ActionRecord, Era, GameState, Phase};

use super::{apply, validate};

/// Run the automatic transitions due after an applied action.
pub fn run(catalog: &Catalog, state: &mut GameState) {
    // 1. Era advance has highest priority.
    if state.era == Era::Canal && state.turn > CANAL_TURN_LIMIT && !state.game_ended {
        force(catalog, state, &Action::AdvanceEra);
    }

    // 2. Close the action phase once every player is out of actions.
    if state.phase == Phase::Action && !state.game_ended && state.all_actions_spent() {
        force(catalog, state, &Action::EndPhase);
    }

    // 3. Game end has lowest priority.
    if !state.game_ended && validate::should_game_end(state) {
        force(catalog, state, &Action::EndGame);
    }
}

/// Apply a forced transition through the normal handlers, keeping the
/// prior state if the transition fails or breaks an invariant.
fn force(catalog: &Catalog, state: &mut GameState, action: &Action) {
    let mut next = state.clone();
    let (turn, era) = (next.turn, next.era);

    if let Err(rejection) = apply::dispatch(catalog, &mut next, action) {
        warn!(action = %action.kind(), %rejection, "forced transition rejected");
        return;
    }
    next.history.push_back(ActionRecord {
        action: action.clone(),
        turn,
        era,
    });
    if let Err(violation) = validate::check_invariants(catalog, &next) {
        error!(action = %action.kind(), %violation, "forced transition violated invariants");
        return;
    }
    *state = next;
}
