//! Selling tests: external, local, and distant routes, beer
//! consumption, and flip tracking.
//!
//! Board positions are staged directly (taking a tile from its pool and
//! placing it built) so each test starts at the interesting state
//! without replaying the build sequence.

use brassworks::{
    Action, ApplyOutcome, BuiltIndustry, Engine, EngineError, GameSetup, GameState, Good,
    Industry, PlayerColor, PlayerId, PlayerSeat, RejectReason, SaleRoute, TileId,
};

fn four_player_game(seed: u64) -> (Engine, GameState) {
    let engine = Engine::standard();
    let state = engine
        .new_game(&GameSetup {
            players: vec![
                PlayerSeat::new("Alice", PlayerColor::Red),
                PlayerSeat::new("Bob", PlayerColor::Blue),
                PlayerSeat::new("Carol", PlayerColor::Green),
                PlayerSeat::new("Dave", PlayerColor::Yellow),
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
fn test_sell_cotton_externally() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let cotton = place(&engine, &mut state, p0, Industry::Cotton, "Kidderminster");
    let brewery = place(&engine, &mut state, p0, Industry::Brewery, "Stafford");

    let sell = Action::SellGoods {
        player: p0,
        industry: cotton,
        route: SaleRoute::External,
        amount: 3,
    };
    let outcome = engine.apply(&state, &sell);
    assert!(outcome.is_applied(), "{:?}", outcome.error);
    let next = outcome.state;

    // Two units at 8, one at 7.
    assert_eq!(next.players[p0].money, 17 + 23);
    assert_eq!(next.external.demand(Good::Cotton), 6);
    assert_eq!(next.external.highest_price(Good::Cotton), 7);

    assert!(next.board.industry(cotton).unwrap().flipped);
    assert!(next.board.industry(brewery).unwrap().used);
    // Selling does not consume an action.
    assert_eq!(next.players[p0].actions_remaining, 2);
}

#[test]
fn test_sell_requires_beer() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let cotton = place(&engine, &mut state, p0, Industry::Cotton, "Kidderminster");

    let sell = Action::SellGoods {
        player: p0,
        industry: cotton,
        route: SaleRoute::External,
        amount: 1,
    };
    let outcome = engine.apply(&state, &sell);
    assert_eq!(reject_reason(&outcome), RejectReason::InsufficientBeer);
    assert_eq!(outcome.state, state);
}

#[test]
fn test_sell_exceeding_demand_rejected() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let cotton = place(&engine, &mut state, p0, Industry::Cotton, "Kidderminster");
    place(&engine, &mut state, p0, Industry::Brewery, "Stafford");

    let sell = Action::SellGoods {
        player: p0,
        industry: cotton,
        route: SaleRoute::External,
        amount: 10,
    };
    let outcome = engine.apply(&state, &sell);
    assert_eq!(reject_reason(&outcome), RejectReason::InsufficientDemand);
    assert_eq!(outcome.state, state);
}

#[test]
fn test_resource_industry_cannot_sell() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let mine = place(&engine, &mut state, p0, Industry::Coal, "Cannock");

    let sell = Action::SellGoods {
        player: p0,
        industry: mine,
        route: SaleRoute::External,
        amount: 1,
    };
    let outcome = engine.apply(&state, &sell);
    assert_eq!(
        reject_reason(&outcome),
        RejectReason::ResourceIndustryCannotSell
    );
    assert_eq!(outcome.state, state);
}

#[test]
fn test_brewery_has_no_external_market() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let brewery = place(&engine, &mut state, p0, Industry::Brewery, "Stafford");

    let sell = Action::SellGoods {
        player: p0,
        industry: brewery,
        route: SaleRoute::External,
        amount: 1,
    };
    let outcome = engine.apply(&state, &sell);
    assert_eq!(reject_reason(&outcome), RejectReason::CannotSellExternally);
    assert_eq!(outcome.state, state);
}

#[test]
fn test_flipped_industry_cannot_sell_again() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let cotton = place(&engine, &mut state, p0, Industry::Cotton, "Kidderminster");
    // Two breweries so beer remains for the second attempt.
    place(&engine, &mut state, p0, Industry::Brewery, "Stafford");
    place(&engine, &mut state, p0, Industry::Brewery, "Stone");

    let sell = Action::SellGoods {
        player: p0,
        industry: cotton,
        route: SaleRoute::External,
        amount: 1,
    };
    let state = engine.apply(&state, &sell).state;
    assert!(state.board.industry(cotton).unwrap().flipped);

    let outcome = engine.apply(&state, &sell);
    assert_eq!(reject_reason(&outcome), RejectReason::IndustryFlipped);
    assert_eq!(outcome.state, state);
}

#[test]
fn test_sell_cotton_locally() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let p1 = PlayerId::new(1);
    // Nottingham hosts both cotton and manufactured goods.
    let cotton = place(&engine, &mut state, p0, Industry::Cotton, "Nottingham");
    let works = place(
        &engine,
        &mut state,
        p1,
        Industry::ManufacturedGoods,
        "Nottingham",
    );
    place(&engine, &mut state, p0, Industry::Brewery, "Stafford");

    let sell = Action::SellGoods {
        player: p0,
        industry: cotton,
        route: SaleRoute::Local,
        amount: 2,
    };
    let outcome = engine.apply(&state, &sell);
    assert!(outcome.is_applied(), "{:?}", outcome.error);
    let next = outcome.state;

    // Local sales pay 2 per unit and never touch external demand.
    assert_eq!(next.players[p0].money, 17 + 4);
    assert_eq!(next.external.demand(Good::Cotton), 9);

    let consumer = next.board.industry(works).unwrap();
    assert!(consumer.used);
    assert!(!consumer.flipped);
    assert!(next.board.industry(cotton).unwrap().flipped);
}

#[test]
fn test_local_sale_needs_a_co_located_consumer() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let cotton = place(&engine, &mut state, p0, Industry::Cotton, "Kidderminster");
    place(&engine, &mut state, p0, Industry::Brewery, "Stafford");

    let sell = Action::SellGoods {
        player: p0,
        industry: cotton,
        route: SaleRoute::Local,
        amount: 1,
    };
    let outcome = engine.apply(&state, &sell);
    assert_eq!(reject_reason(&outcome), RejectReason::NoLocalDemand);
    assert_eq!(outcome.state, state);
}

#[test]
fn test_own_consumer_does_not_count_as_local_demand() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let cotton = place(&engine, &mut state, p0, Industry::Cotton, "Nottingham");
    // Same owner: no trade with yourself.
    place(
        &engine,
        &mut state,
        p0,
        Industry::ManufacturedGoods,
        "Nottingham",
    );
    place(&engine, &mut state, p0, Industry::Brewery, "Stafford");

    let sell = Action::SellGoods {
        player: p0,
        industry: cotton,
        route: SaleRoute::Local,
        amount: 1,
    };
    let outcome = engine.apply(&state, &sell);
    assert_eq!(reject_reason(&outcome), RejectReason::NoLocalDemand);
}

#[test]
fn test_sell_cotton_to_distant_market() {
    let (engine, mut state) = four_player_game(42);
    let p0 = PlayerId::new(0);
    let cotton = place(&engine, &mut state, p0, Industry::Cotton, "Worcester");
    place(&engine, &mut state, p0, Industry::Brewery, "Stafford");

    let sell = Action::SellGoods {
        player: p0,
        industry: cotton,
        route: SaleRoute::Distant,
        amount: 2,
    };
    let outcome = engine.apply(&state, &sell);
    assert!(outcome.is_applied(), "{:?}", outcome.error);
    let next = outcome.state;

    // Distant sales pay 1 per unit; external demand is untouched.
    assert_eq!(next.players[p0].money, 17 + 2);
    assert_eq!(next.external.demand(Good::Cotton), 9);
    assert!(next.board.industry(cotton).unwrap().flipped);
}
