//! Turn, phase, era, and game-end sequencing tests, including the
//! forced transitions the orchestrator injects.

use brassworks::rules::check_invariants;
use brassworks::{
    Action, ActionKind, ApplyOutcome, BuiltIndustry, Engine, EngineError, Era, GameSetup,
    GameState, Industry, Phase, PlayerColor, PlayerId, PlayerSeat, RejectReason, Resource, TileId,
};

fn two_player_game(seed: u64) -> (Engine, GameState) {
    let engine = Engine::standard();
    let state = engine
        .new_game(&GameSetup {
            players: vec![
                PlayerSeat::new("Alice", PlayerColor::Red),
                PlayerSeat::new("Bob", PlayerColor::Blue),
            ],
            seed,
        })
        .expect("valid setup");
    (engine, state)
}

/// Place an industry as already built, keeping the pool consistent.
fn place(
    engine: &Engine,
    state: &mut GameState,
    player: PlayerId,
    industry: Industry,
    location: &str,
) -> TileId {
    let loc = engine.catalog().location_by_name(location).unwrap().id;
    let tile = state.board.pools.available(industry, state.era)[0];
    assert!(state.board.pools.take(industry, state.era, tile));
    state
        .board
        .industries
        .push_back(BuiltIndustry::new(tile, loc, player));
    tile
}

fn reject_reason(outcome: &ApplyOutcome) -> RejectReason {
    match outcome.error.as_ref().expect("expected a rejection") {
        EngineError::Rule(rejection) => rejection.reason,
        other => panic!("expected rule rejection, got {other}"),
    }
}

#[test]
fn test_rail_connection_locked_in_canal_era() {
    let (engine, state) = two_player_game(42);
    let rail_only = engine
        .catalog()
        .connections()
        .iter()
        .find(|c| c.availability.matches(Era::Rail) && !c.availability.matches(Era::Canal))
        .unwrap();

    let develop = Action::DevelopLocation {
        player: PlayerId::new(0),
        connection: rail_only.id,
        coal: 0,
        iron: 0,
    };
    let outcome = engine.apply(&state, &develop);
    assert_eq!(reject_reason(&outcome), RejectReason::ConnectionWrongEra);
    assert_eq!(outcome.state, state);
}

#[test]
fn test_phase_cycle_rotates_players() {
    let (engine, state) = two_player_game(42);

    // Action -> Income.
    let state = engine.apply(&state, &Action::EndPhase).state;
    assert_eq!(state.phase, Phase::Income);

    let state = engine.apply(&state, &Action::CalculateIncome).state;
    // Income level 10 pays 5.
    assert_eq!(state.players[PlayerId::new(0)].money, 22);
    assert_eq!(state.players[PlayerId::new(1)].money, 22);

    // Income -> Market.
    let state = engine.apply(&state, &Action::EndPhase).state;
    assert_eq!(state.phase, Phase::Market);

    let coal_before = state.market.available(Resource::Coal);
    let state = engine.apply(&state, &Action::UpdateMarkets).state;
    assert!(state.market.available(Resource::Coal) > coal_before);

    // Market -> Action hands over to the next player.
    let state = engine.apply(&state, &Action::EndPhase).state;
    assert_eq!(state.phase, Phase::Action);
    assert_eq!(state.current, PlayerId::new(1));
    assert_eq!(state.turn, 1);

    // A full second cycle wraps back to player 0 and bumps the turn.
    let state = engine.apply(&state, &Action::EndPhase).state;
    let state = engine.apply(&state, &Action::EndPhase).state;
    let state = engine.apply(&state, &Action::EndPhase).state;
    assert_eq!(state.phase, Phase::Action);
    assert_eq!(state.current, PlayerId::new(0));
    assert_eq!(state.turn, 2);
}

#[test]
fn test_start_turn_resets_action_budget() {
    let (engine, mut state) = two_player_game(42);
    state.players[PlayerId::new(0)].actions_remaining = 0;
    state.players[PlayerId::new(1)].actions_remaining = 1;

    let state = engine.apply(&state, &Action::StartTurn).state;
    assert_eq!(state.players[PlayerId::new(0)].actions_remaining, 2);
    assert_eq!(state.players[PlayerId::new(1)].actions_remaining, 1);
}

#[test]
fn test_action_phase_auto_closes_when_all_have_passed() {
    let (engine, mut state) = two_player_game(42);
    state.players[PlayerId::new(1)].actions_remaining = 0;

    let outcome = engine.apply(
        &state,
        &Action::Pass {
            player: PlayerId::new(0),
        },
    );
    assert!(outcome.is_applied());
    let next = outcome.state;

    // The orchestrator appended the forced EndPhase after the pass.
    assert_eq!(next.phase, Phase::Income);
    let kinds: Vec<ActionKind> = next.history.iter().map(|r| r.action.kind()).collect();
    assert_eq!(kinds, vec![ActionKind::Pass, ActionKind::EndPhase]);
}

#[test]
fn test_canal_era_ends_after_turn_limit() {
    let (engine, mut state) = two_player_game(42);
    state.turn = 9;

    let outcome = engine.apply(
        &state,
        &Action::Pass {
            player: PlayerId::new(0),
        },
    );
    assert!(outcome.is_applied());
    let next = outcome.state;

    assert_eq!(next.era, Era::Rail);
    assert_eq!(next.turn, 1);

    // Every hand was redealt from the rail-era cards.
    for (_, player) in next.players.iter() {
        assert_eq!(player.hand.len(), 8);
        for card in &player.hand {
            let card = engine.catalog().card(*card).unwrap();
            assert!(card.era.matches(Era::Rail));
        }
    }
    check_invariants(engine.catalog(), &next).expect("era handover keeps cards consistent");

    // The handover is recorded under the turn that triggered it.
    let record = next
        .history
        .iter()
        .find(|r| r.action.kind() == ActionKind::AdvanceEra)
        .unwrap();
    assert_eq!(record.turn, 9);
    assert_eq!(record.era, Era::Canal);
}

#[test]
fn test_era_cannot_advance_past_rail() {
    let (engine, mut state) = two_player_game(42);
    state.era = Era::Rail;

    let outcome = engine.apply(&state, &Action::AdvanceEra);
    assert_eq!(reject_reason(&outcome), RejectReason::EraTerminal);
    assert_eq!(outcome.state, state);
}

#[test]
fn test_rail_era_ends_the_game() {
    let (engine, mut state) = two_player_game(42);
    state.era = Era::Rail;
    state.turn = 7;
    let p0 = PlayerId::new(0);
    let mine = place(&engine, &mut state, p0, Industry::Coal, "Cannock");
    state.players[p0].victory_points = 3;

    let outcome = engine.apply(&state, &Action::Pass { player: p0 });
    assert!(outcome.is_applied());
    let next = outcome.state;

    assert!(next.game_ended);
    let scores = next.final_scores.as_ref().expect("scores computed");

    let mine_points = engine.catalog().tile(mine).unwrap().victory_points;
    let p0_score = &scores[p0];
    assert_eq!(p0_score.industry_points, mine_points);
    assert_eq!(p0_score.connection_points, 3);
    // 17 money floors to 4 points.
    assert_eq!(p0_score.money_points, 4);
    assert_eq!(
        p0_score.total,
        mine_points + 3 + 4
    );

    let p1_score = &scores[PlayerId::new(1)];
    assert_eq!(p1_score.total, 4);

    // Nothing further applies once the game has ended.
    let after = engine.apply(&next, &Action::Pass { player: p0 });
    assert_eq!(reject_reason(&after), RejectReason::GameEnded);
}

#[test]
fn test_income_shortfall_clamps_at_zero() {
    let (engine, mut state) = two_player_game(42);
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    // Level 0 on the track charges 10.
    state.players[p0].income_level = 0;
    state.players[p0].money = 5;
    state.players[p1].has_loan = true;

    let next = engine.apply(&state, &Action::CalculateIncome).state;
    assert_eq!(next.players[p0].money, 0);
    // Level 10 pays 5, minus 3 loan interest.
    assert_eq!(next.players[p1].money, 19);
}
