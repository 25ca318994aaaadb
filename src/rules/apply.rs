//! State-transition handlers.
//!
//! One handler per action kind. Each re-validates before mutating, so a
//! caller that skipped [`validate`] still cannot corrupt state. Handlers
//! mutate the state they are given; the engine hands them a clone and
//! only publishes it after the invariant check passes.
//!
//! [`validate`]: super::validate::validate

use rustc_hash::FxHashSet;

use crate::catalog::constants::{
    ACTIONS_PER_TURN, DISTANT_SALE_UNIT_PRICE, LOAN_AMOUNT, LOAN_INTEREST, LOCAL_SALE_UNIT_PRICE,
    MONEY_TO_VP, STARTING_HAND_SIZE, income_for_level,
};
use crate::catalog::Catalog;
use crate::core::{
    Action, BuiltIndustry, CardId, ConnectionId, Era, GameState, Industry, LocationId, Phase,
    PlayerId, PlayerMap, Resource, ResourcePurchase, SaleRoute, ScoreBreakdown, TileId,
};

use super::error::{RejectReason, Rejection};
use super::validate;

/// Apply an action to the state in place.
///
/// Exhaustive over every action kind; re-validates first, so the state
/// is untouched on any `Err`.
pub fn dispatch(catalog: &Catalog, state: &mut GameState, action: &Action) -> Result<(), Rejection> {
    validate::validate(catalog, state, action)?;

    match action {
        Action::BuildIndustry {
            player,
            location,
            industry,
            tile,
            coal,
            iron,
        } => build_industry(catalog, state, *player, *location, *industry, *tile, *coal, *iron),
        Action::DevelopLocation {
            player,
            connection,
            coal,
            iron,
        } => develop_location(catalog, state, *player, *connection, *coal, *iron),
        Action::SellGoods {
            player,
            industry,
            route,
            amount,
        } => sell_goods(catalog, state, *player, *industry, *route, *amount),
        Action::TakeLoan { player } => {
            take_loan(state, *player);
            Ok(())
        }
        Action::Pass { player } => {
            state.players[*player].actions_remaining = 0;
            Ok(())
        }
        Action::PlayCard { player, card } => move_to_discard(state, *player, *card),
        Action::DiscardCards { player, cards } => {
            for card in cards {
                move_to_discard(state, *player, *card)?;
            }
            Ok(())
        }
        Action::BuyResources { player, purchases } => buy_resources(state, *player, purchases),
        Action::EndPhase => {
            end_phase(state);
            Ok(())
        }
        Action::StartTurn => {
            state.players[state.current].actions_remaining = ACTIONS_PER_TURN;
            Ok(())
        }
        Action::AdvanceEra => {
            advance_era(catalog, state);
            Ok(())
        }
        Action::CalculateIncome => {
            calculate_income(state);
            Ok(())
        }
        Action::UpdateMarkets => {
            state.market.refill();
            state.external.refill();
            Ok(())
        }
        Action::EndGame => {
            end_game(catalog, state);
            Ok(())
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build_industry(
    catalog: &Catalog,
    state: &mut GameState,
    player: PlayerId,
    location: LocationId,
    industry: Industry,
    tile: TileId,
    coal: u32,
    iron: u32,
) -> Result<(), Rejection> {
    let spec = catalog.tile(tile).ok_or(RejectReason::TileNotAvailable)?;
    // Charged at pre-purchase prices; the drain below may spill higher.
    let total = validate::build_cost(&state.market, spec.cost, coal, iron);

    purchase_resources(state, coal, iron)?;

    let p = &mut state.players[player];
    p.money -= total;
    p.actions_remaining -= 1;

    state
        .board
        .industries
        .push_back(BuiltIndustry::new(tile, location, player));
    state.board.pools.take(industry, state.era, tile);
    Ok(())
}

fn develop_location(
    catalog: &Catalog,
    state: &mut GameState,
    player: PlayerId,
    connection: ConnectionId,
    coal: u32,
    iron: u32,
) -> Result<(), Rejection> {
    let conn = catalog
        .connection(connection)
        .ok_or(RejectReason::ConnectionNotFound)?;
    let total = validate::build_cost(&state.market, conn.cost, coal, iron);
    let victory_points = conn.victory_points;

    purchase_resources(state, coal, iron)?;

    let p = &mut state.players[player];
    p.money -= total;
    p.actions_remaining -= 1;
    p.connections.insert(connection);
    // Connection points score immediately, not at game end.
    p.victory_points += victory_points;

    state.board.built_connections.insert(connection);
    Ok(())
}

/// Drain the supplied coal and iron from the market. Availability was
/// validated, so a failed drain means the validator and market disagree.
fn purchase_resources(state: &mut GameState, coal: u32, iron: u32) -> Result<(), Rejection> {
    if coal > 0 && state.market.purchase(Resource::Coal, coal).is_none() {
        return Err(RejectReason::MarketDepleted.into());
    }
    if iron > 0 && state.market.purchase(Resource::Iron, iron).is_none() {
        return Err(RejectReason::MarketDepleted.into());
    }
    Ok(())
}

fn sell_goods(
    catalog: &Catalog,
    state: &mut GameState,
    player: PlayerId,
    tile: TileId,
    route: SaleRoute,
    amount: u32,
) -> Result<(), Rejection> {
    let spec = *catalog.tile(tile).ok_or(RejectReason::IndustryNotOwned)?;
    let location = state
        .board
        .industry(tile)
        .map(|b| b.location)
        .ok_or(RejectReason::IndustryNotOwned)?;

    let income = match route {
        SaleRoute::External => {
            let good = spec
                .industry
                .good()
                .ok_or(RejectReason::CannotSellExternally)?;
            state
                .external
                .sell(good, amount)
                .ok_or(RejectReason::InsufficientDemand)?
        }
        SaleRoute::Local => {
            let consumer = validate::local_consumer(catalog, state, player, location, &spec)
                .ok_or(RejectReason::NoLocalDemand)?;
            if let Some(built) = state.board.industry_mut(consumer) {
                built.used = true;
            }
            LOCAL_SALE_UNIT_PRICE * i64::from(amount)
        }
        SaleRoute::Distant => {
            let good = spec.industry.good().ok_or(RejectReason::NoDistantMarket)?;
            if !validate::distant_market_reachable(catalog, state, player, good) {
                return Err(RejectReason::NoDistantMarket.into());
            }
            DISTANT_SALE_UNIT_PRICE * i64::from(amount)
        }
    };

    state.players[player].money += income;
    if let Some(built) = state.board.industry_mut(tile) {
        built.flipped = true;
    }
    if spec.beer_required > 0 {
        consume_beer(catalog, state, player, spec.beer_required);
    }
    Ok(())
}

/// Draw down the seller's unused breweries until `required` beer is
/// covered, marking each one used. Availability was validated.
fn consume_beer(catalog: &Catalog, state: &mut GameState, player: PlayerId, required: u32) {
    let breweries: Vec<(TileId, u32)> = state
        .board
        .industries_of(player)
        .filter(|b| !b.used)
        .filter_map(|b| {
            let spec = catalog.tile(b.tile)?;
            (spec.industry == Industry::Brewery).then(|| {
                let output = spec.produces.map_or(1, |(_, amount)| amount);
                (b.tile, output)
            })
        })
        .collect();

    let mut remaining = required;
    for (tile, output) in breweries {
        if remaining == 0 {
            break;
        }
        if let Some(built) = state.board.industry_mut(tile) {
            built.used = true;
        }
        remaining = remaining.saturating_sub(output);
    }
}

fn take_loan(state: &mut GameState, player: PlayerId) {
    let p = &mut state.players[player];
    p.money += LOAN_AMOUNT;
    p.has_loan = true;
    // Permanent income penalty; the track bottoms out at level 0.
    p.income_level = p.income_level.saturating_sub(LOAN_INTEREST as u8);
}

fn move_to_discard(state: &mut GameState, player: PlayerId, card: CardId) -> Result<(), Rejection> {
    let hand = &mut state.players[player].hand;
    let pos = hand
        .index_of(&card)
        .ok_or_else(|| Rejection::new(RejectReason::CardNotInHand).with("card", i64::from(card.0)))?;
    hand.remove(pos);
    state.discard.push_back(card);
    Ok(())
}

fn buy_resources(
    state: &mut GameState,
    player: PlayerId,
    purchases: &[ResourcePurchase],
) -> Result<(), Rejection> {
    // The batch is atomic: validation costed it against a scratch
    // market, so every drain here succeeds or none has run.
    let mut total: i64 = 0;
    for purchase in purchases {
        total += state
            .market
            .purchase(purchase.resource, purchase.amount)
            .ok_or(RejectReason::MarketDepleted)?;
    }
    state.players[player].money -= total;
    Ok(())
}

fn end_phase(state: &mut GameState) {
    match state.phase {
        Phase::Action => state.phase = Phase::Income,
        Phase::Income => state.phase = Phase::Market,
        Phase::Market => {
            state.phase = Phase::Action;
            let next = state.current.index() + 1;
            if next < state.player_count() {
                state.current = PlayerId::new(next as u8);
            } else {
                state.current = PlayerId::new(0);
                state.turn += 1;
            }
        }
    }
}

fn advance_era(catalog: &Catalog, state: &mut GameState) {
    state.era = Era::Rail;
    state.turn = 1;

    // All hands go to the discard pile.
    for (_, player) in state.players.iter_mut() {
        for card in player.hand.iter() {
            state.discard.push_back(*card);
        }
        player.hand.clear();
    }

    // Fresh hands come from the rail-era cards still in the deck.
    let mut rail_cards: Vec<CardId> = state
        .deck
        .iter()
        .copied()
        .filter(|id| catalog.card(*id).is_some_and(|c| c.era.matches(Era::Rail)))
        .collect();
    state.rng.shuffle(&mut rail_cards);

    let mut dealt: FxHashSet<CardId> = FxHashSet::default();
    let mut next = rail_cards.into_iter();
    for (_, player) in state.players.iter_mut() {
        for _ in 0..STARTING_HAND_SIZE {
            if let Some(card) = next.next() {
                player.hand.push_back(card);
                dealt.insert(card);
            }
        }
    }
    state.deck.retain(|card| !dealt.contains(card));
}

fn calculate_income(state: &mut GameState) {
    for (_, player) in state.players.iter_mut() {
        player.money += income_for_level(player.income_level);
        if player.has_loan {
            player.money -= LOAN_INTEREST;
        }
        // A shortfall cannot push a player below zero.
        player.money = player.money.max(0);
    }
}

fn end_game(catalog: &Catalog, state: &mut GameState) {
    state.game_ended = true;

    let scores = PlayerMap::new(state.player_count(), |id| {
        let industry_points: u32 = state
            .board
            .industries_of(id)
            .filter_map(|b| catalog.tile(b.tile))
            .map(|spec| spec.victory_points)
            .sum();
        let player = &state.players[id];
        let connection_points = player.victory_points;
        let money_points = (player.money.max(0) / MONEY_TO_VP) as u32;
        ScoreBreakdown {
            industry_points,
            connection_points,
            money_points,
            total: industry_points + connection_points + money_points,
        }
    });
    state.final_scores = Some(scores);
}
