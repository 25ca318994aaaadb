//! Pure legality predicates.
//!
//! One check per action kind behind a single [`validate`] entry point,
//! plus the shared turn/action-budget gate. Nothing here mutates; the
//! transition handlers re-validate before touching state.

use rustc_hash::FxHashSet;

use crate::catalog::{Catalog, Connection, TileSpec};
use crate::core::{
    Action, CardId, Era, GameState, Good, Industry, LocationId, Phase, PlayerId, PlayerState,
    Resource, ResourcePurchase, SaleRoute, TileId,
};
use crate::market::ResourceMarket;

use super::error::{InvariantViolation, RejectReason, Rejection};

/// Check an action's legality against the current state.
pub fn validate(catalog: &Catalog, state: &GameState, action: &Action) -> Result<(), Rejection> {
    match action {
        Action::BuildIndustry {
            player,
            location,
            industry,
            tile,
            coal,
            iron,
        } => {
            let p = gate(state, *player, true)?;
            check_build(catalog, state, p, *location, *industry, *tile, *coal, *iron)
        }
        Action::DevelopLocation {
            player,
            connection,
            coal,
            iron,
        } => {
            let p = gate(state, *player, true)?;
            check_develop(catalog, state, p, *player, *connection, *coal, *iron)
        }
        Action::SellGoods {
            player,
            industry,
            route,
            amount,
        } => {
            gate(state, *player, true)?;
            check_sell(catalog, state, *player, *industry, *route, *amount)
        }
        Action::TakeLoan { player } => {
            let p = gate(state, *player, true)?;
            if p.has_loan {
                return Err(RejectReason::LoanOutstanding.into());
            }
            Ok(())
        }
        Action::Pass { player } => {
            gate(state, *player, false)?;
            Ok(())
        }
        Action::PlayCard { player, card } => {
            let p = gate(state, *player, true)?;
            check_in_hand(p, *card)
        }
        Action::DiscardCards { player, cards } => {
            let p = gate(state, *player, true)?;
            for card in cards {
                check_in_hand(p, *card)?;
            }
            Ok(())
        }
        Action::BuyResources { player, purchases } => {
            let p = gate(state, *player, true)?;
            check_buy(state, p, purchases)
        }
        Action::AdvanceEra => {
            if state.era == Era::Rail {
                return Err(RejectReason::EraTerminal.into());
            }
            Ok(())
        }
        Action::EndPhase
        | Action::StartTurn
        | Action::CalculateIncome
        | Action::UpdateMarkets
        | Action::EndGame => Ok(()),
    }
}

/// Shared gate for player actions: the player exists, it is their turn,
/// and they have actions remaining (`Pass` skips the budget check).
fn gate(
    state: &GameState,
    player: PlayerId,
    require_actions: bool,
) -> Result<&PlayerState, Rejection> {
    if state.game_ended {
        return Err(RejectReason::GameEnded.into());
    }
    let p = state
        .players
        .get(player)
        .ok_or(RejectReason::PlayerNotFound)?;
    if state.current != player {
        return Err(RejectReason::NotPlayersTurn.into());
    }
    if require_actions && p.actions_remaining == 0 {
        return Err(RejectReason::NoActionsRemaining.into());
    }
    Ok(p)
}

fn check_in_hand(player: &PlayerState, card: CardId) -> Result<(), Rejection> {
    if player.hand.contains(&card) {
        Ok(())
    } else {
        Err(Rejection::new(RejectReason::CardNotInHand).with("card", i64::from(card.0)))
    }
}

/// Cheapest current market unit price. Coal and iron only; the depleted
/// sentinel makes unaffordable what cannot be bought.
fn unit_price(market: &ResourceMarket, resource: Resource) -> i64 {
    i64::from(market.lowest_price(resource).unwrap_or(0))
}

#[allow(clippy::too_many_arguments)]
fn check_build(
    catalog: &Catalog,
    state: &GameState,
    player: &PlayerState,
    location: LocationId,
    industry: Industry,
    tile: TileId,
    coal: u32,
    iron: u32,
) -> Result<(), Rejection> {
    let loc = catalog
        .location(location)
        .ok_or(RejectReason::LocationNotFound)?;

    if !loc.allows(industry) {
        return Err(Rejection::new(RejectReason::IndustryNotAllowed)
            .with("requested", industry.index() as i64));
    }

    let occupied = state.board.industries_at(location).count();
    if occupied >= loc.slots as usize {
        return Err(Rejection::new(RejectReason::LocationFull)
            .with("slots", i64::from(loc.slots))
            .with("occupied", occupied as i64));
    }

    if !state.board.pools.contains(industry, state.era, tile) {
        return Err(RejectReason::TileNotAvailable.into());
    }
    // Pool membership guarantees the id is in the catalog.
    let spec = catalog.tile(tile).ok_or(RejectReason::TileNotAvailable)?;

    if coal < spec.coal_cost {
        return Err(Rejection::new(RejectReason::InsufficientCoal)
            .with("required", i64::from(spec.coal_cost))
            .with("provided", i64::from(coal)));
    }
    if iron < spec.iron_cost {
        return Err(Rejection::new(RejectReason::InsufficientIron)
            .with("required", i64::from(spec.iron_cost))
            .with("provided", i64::from(iron)));
    }

    let total = build_cost(&state.market, spec.cost, coal, iron);
    if player.money < total {
        return Err(Rejection::new(RejectReason::InsufficientFunds)
            .with("required", total)
            .with("available", player.money));
    }

    check_stock(&state.market, Resource::Coal, coal)?;
    check_stock(&state.market, Resource::Iron, iron)?;
    Ok(())
}

/// Tile or connection cost plus resources priced at the pre-action
/// cheapest level. The charge is fixed here even when the actual drain
/// spills into pricier levels.
pub(super) fn build_cost(market: &ResourceMarket, base: i64, coal: u32, iron: u32) -> i64 {
    base + i64::from(coal) * unit_price(market, Resource::Coal)
        + i64::from(iron) * unit_price(market, Resource::Iron)
}

fn check_stock(market: &ResourceMarket, resource: Resource, amount: u32) -> Result<(), Rejection> {
    if amount > 0 && amount > market.available(resource) {
        return Err(Rejection::new(RejectReason::MarketDepleted)
            .with("required", i64::from(amount))
            .with("available", i64::from(market.available(resource))));
    }
    Ok(())
}

fn check_develop(
    catalog: &Catalog,
    state: &GameState,
    player_state: &PlayerState,
    player: PlayerId,
    connection: crate::core::ConnectionId,
    coal: u32,
    iron: u32,
) -> Result<(), Rejection> {
    let conn = catalog
        .connection(connection)
        .ok_or(RejectReason::ConnectionNotFound)?;

    if !conn.availability.matches(state.era) {
        return Err(RejectReason::ConnectionWrongEra.into());
    }
    if state.board.built_connections.contains(&connection) {
        return Err(RejectReason::ConnectionAlreadyBuilt.into());
    }

    let total = build_cost(&state.market, conn.cost, coal, iron);
    if player_state.money < total {
        return Err(Rejection::new(RejectReason::InsufficientFunds)
            .with("required", total)
            .with("available", player_state.money));
    }

    check_stock(&state.market, Resource::Coal, coal)?;
    check_stock(&state.market, Resource::Iron, iron)?;

    if !in_network(catalog, state, player, conn) {
        return Err(RejectReason::NotInNetwork.into());
    }
    Ok(())
}

/// Whether the player's network reaches either endpoint: an owned
/// industry at the location, or an owned connection touching it.
fn in_network(catalog: &Catalog, state: &GameState, player: PlayerId, conn: &Connection) -> bool {
    let reachable = network_locations(catalog, state, player);
    conn.endpoints.iter().any(|loc| reachable.contains(loc))
}

/// All locations in a player's network: owned industry locations plus
/// owned connection endpoints. Direct endpoint membership, not a full
/// graph traversal.
pub(super) fn network_locations(
    catalog: &Catalog,
    state: &GameState,
    player: PlayerId,
) -> FxHashSet<LocationId> {
    let mut reachable = FxHashSet::default();
    for built in state.board.industries_of(player) {
        reachable.insert(built.location);
    }
    if let Some(p) = state.players.get(player) {
        for conn_id in &p.connections {
            if let Some(conn) = catalog.connection(*conn_id) {
                reachable.insert(conn.endpoints[0]);
                reachable.insert(conn.endpoints[1]);
            }
        }
    }
    reachable
}

fn check_sell(
    catalog: &Catalog,
    state: &GameState,
    player: PlayerId,
    tile: TileId,
    route: SaleRoute,
    amount: u32,
) -> Result<(), Rejection> {
    let built = state
        .board
        .industry(tile)
        .filter(|b| b.owner == player)
        .ok_or(RejectReason::IndustryNotOwned)?;
    let spec = catalog.tile(tile).ok_or(RejectReason::IndustryNotOwned)?;

    if spec.industry.is_resource_producer() {
        return Err(RejectReason::ResourceIndustryCannotSell.into());
    }
    if built.flipped {
        return Err(RejectReason::IndustryFlipped.into());
    }

    if spec.beer_required > 0 {
        let available = beer_available(catalog, state, player);
        if available < spec.beer_required {
            return Err(Rejection::new(RejectReason::InsufficientBeer)
                .with("required", i64::from(spec.beer_required))
                .with("available", i64::from(available)));
        }
    }

    match route {
        SaleRoute::External => {
            let good = spec
                .industry
                .good()
                .ok_or(RejectReason::CannotSellExternally)?;
            let demand = state.external.demand(good);
            if amount > demand {
                return Err(Rejection::new(RejectReason::InsufficientDemand)
                    .with("requested", i64::from(amount))
                    .with("available", i64::from(demand)));
            }
        }
        SaleRoute::Local => {
            if local_consumer(catalog, state, player, built.location, spec).is_none() {
                return Err(RejectReason::NoLocalDemand.into());
            }
        }
        SaleRoute::Distant => {
            let good = spec.industry.good().ok_or(RejectReason::NoDistantMarket)?;
            if !distant_market_reachable(catalog, state, player, good) {
                return Err(RejectReason::NoDistantMarket.into());
            }
        }
    }
    Ok(())
}

/// The first co-located consumer for a local sale: another player's
/// unflipped manufactured-goods works buying the seller's cotton.
/// A placeholder trading policy, not the full link rule.
pub(super) fn local_consumer(
    catalog: &Catalog,
    state: &GameState,
    seller: PlayerId,
    location: LocationId,
    seller_spec: &TileSpec,
) -> Option<TileId> {
    if seller_spec.industry != Industry::Cotton {
        return None;
    }
    state
        .board
        .industries_at(location)
        .filter(|b| b.owner != seller && !b.flipped)
        .find(|b| {
            catalog
                .tile(b.tile)
                .is_some_and(|s| s.industry == Industry::ManufacturedGoods)
        })
        .map(|b| b.tile)
}

/// Whether the player's network reaches a location with a market link
/// for `good`.
pub(super) fn distant_market_reachable(
    catalog: &Catalog,
    state: &GameState,
    player: PlayerId,
    good: Good,
) -> bool {
    network_locations(catalog, state, player)
        .iter()
        .any(|loc| catalog.location(*loc).is_some_and(|l| l.links_to(good)))
}

fn check_buy(
    state: &GameState,
    player: &PlayerState,
    purchases: &[ResourcePurchase],
) -> Result<(), Rejection> {
    // Cost the whole batch against a scratch market so the check sees
    // the same spilled prices the real drain will charge.
    let mut scratch = state.market.clone();
    let mut total: i64 = 0;
    for purchase in purchases {
        if purchase.resource == Resource::Beer {
            return Err(RejectReason::NotMarketTraded.into());
        }
        match scratch.purchase(purchase.resource, purchase.amount) {
            Some(cost) => total += cost,
            None => {
                return Err(Rejection::new(RejectReason::MarketDepleted)
                    .with("required", i64::from(purchase.amount))
                    .with("available", i64::from(state.market.available(purchase.resource))));
            }
        }
    }
    if player.money < total {
        return Err(Rejection::new(RejectReason::InsufficientFunds)
            .with("required", total)
            .with("available", player.money));
    }
    Ok(())
}

/// Beer the seller can draw on: one unit per unused brewery they own.
/// Network-wide beer sharing is a known simplification.
pub(super) fn beer_available(catalog: &Catalog, state: &GameState, player: PlayerId) -> u32 {
    state
        .board
        .industries_of(player)
        .filter(|b| !b.used)
        .filter(|b| {
            catalog
                .tile(b.tile)
                .is_some_and(|s| s.industry == Industry::Brewery)
        })
        .map(|b| {
            catalog
                .tile(b.tile)
                .and_then(|s| s.produces.map(|(_, amount)| amount))
                .unwrap_or(1)
        })
        .sum()
}

/// Whether the game-end predicate holds: the rail era's turn limit has
/// been exceeded, or every player passed during the action phase.
#[must_use]
pub fn should_game_end(state: &GameState) -> bool {
    if state.era == Era::Rail && state.turn > crate::catalog::constants::RAIL_TURN_LIMIT {
        return true;
    }
    state.phase == Phase::Action && state.all_actions_spent()
}

/// Post-transition consistency checks. A failure here is an engine
/// defect; the caller must discard the transitioned state.
pub fn check_invariants(catalog: &Catalog, state: &GameState) -> Result<(), InvariantViolation> {
    if state.current.index() >= state.player_count() {
        return Err(InvariantViolation::InvalidCurrentPlayer);
    }

    let mut owned_connections = FxHashSet::default();
    for (id, player) in state.players.iter() {
        if player.money < 0 {
            return Err(InvariantViolation::NegativeMoney(id));
        }
        if player.hand.len() > crate::catalog::constants::MAX_HAND_SIZE {
            return Err(InvariantViolation::HandOverflow(id));
        }
        for conn in &player.connections {
            if !state.board.built_connections.contains(conn) {
                return Err(InvariantViolation::ConnectionOwnershipMismatch(id, *conn));
            }
            if !owned_connections.insert(*conn) {
                return Err(InvariantViolation::DuplicateConnection(*conn));
            }
        }
    }

    let mut seen_tiles = FxHashSet::default();
    for built in &state.board.industries {
        if !seen_tiles.insert(built.tile) {
            return Err(InvariantViolation::DuplicateIndustry(built.tile));
        }
        if state.board.pools.contains_tile(built.tile) {
            return Err(InvariantViolation::BuiltTileStillPooled(built.tile));
        }
    }

    // Deck, hands, and discard must partition the card catalog.
    let mut counts = vec![0u8; catalog.cards().len()];
    let all_cards = state
        .deck
        .iter()
        .chain(state.discard.iter())
        .chain(state.players.iter().flat_map(|(_, p)| p.hand.iter()));
    for card in all_cards {
        match counts.get_mut(card.index()) {
            Some(count) => *count += 1,
            None => return Err(InvariantViolation::CardPartitionBroken(*card)),
        }
    }
    for (i, count) in counts.iter().enumerate() {
        if *count != 1 {
            return Err(InvariantViolation::CardPartitionBroken(CardId::new(
                i as u16,
            )));
        }
    }

    Ok(())
}
