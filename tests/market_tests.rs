//! Market model properties: all-or-nothing drains, front-first pricing,
//! and capped refills.

use proptest::prelude::*;

use brassworks::{ExternalMarkets, Good, PriceTrack, Resource, ResourceMarket};

fn track_strategy() -> impl Strategy<Value = PriceTrack> {
    prop::collection::vec(0u32..5, 1..8).prop_map(|levels| {
        // Ascending unit prices starting at 1, one per level.
        let prices: Vec<u32> = (1..=levels.len() as u32).collect();
        PriceTrack::new(&prices, &levels)
    })
}

proptest! {
    #[test]
    fn drain_is_all_or_nothing(track in track_strategy(), amount in 0u32..40) {
        let mut drained = track.clone();
        let total = drained.total();

        match drained.drain(amount) {
            Some(value) => {
                prop_assert!(amount <= total);
                prop_assert_eq!(drained.total(), total - amount);
                // Every unit costs at least the cheapest and at most the
                // priciest level.
                prop_assert!(value >= i64::from(amount));
                let max_price = track.levels().len() as i64;
                prop_assert!(value <= i64::from(amount) * max_price);
            }
            None => {
                prop_assert!(amount > total);
                prop_assert_eq!(&drained, &track);
            }
        }
    }

    #[test]
    fn drain_is_path_independent(track in track_strategy(), a in 0u32..10, b in 0u32..10) {
        // Front-first greedy pricing: two successive drains charge the
        // same as one combined drain and leave the same track.
        let mut split = track.clone();
        let mut whole = track;
        if let Some(first) = split.drain(a) {
            if let Some(second) = split.drain(b) {
                let combined = whole.drain(a + b).expect("combined drain fits");
                prop_assert_eq!(first + second, combined);
                prop_assert_eq!(split, whole);
            }
        }
    }

    #[test]
    fn refill_respects_caps(
        track in track_strategy(),
        add in prop::collection::vec(0u32..4, 8),
        cap in prop::collection::vec(0u32..6, 8),
    ) {
        let before = track.clone();
        let mut refilled = track;
        refilled.refill(&add, &cap);

        for (i, level) in refilled.levels().iter().enumerate() {
            prop_assert!(*level <= cap[i]);
            prop_assert!(*level <= before.levels()[i] + add[i]);
        }
    }
}

#[test]
fn test_depleted_resource_price_is_a_sentinel() {
    let mut market = ResourceMarket::for_player_count(2);
    let total = market.available(Resource::Coal);
    market.purchase(Resource::Coal, total).unwrap();

    // One past the top of the track: unpayable, never a real price.
    assert_eq!(market.lowest_price(Resource::Coal), Some(7));
    assert_eq!(market.available(Resource::Coal), 0);
}

#[test]
fn test_exhausted_demand_price_is_zero() {
    let mut markets = ExternalMarkets::for_player_count(2);
    let demand = markets.demand(Good::Pottery);
    markets.sell(Good::Pottery, demand).unwrap();

    assert_eq!(markets.highest_price(Good::Pottery), 0);
    assert_eq!(markets.demand(Good::Pottery), 0);
}

#[test]
fn test_resource_refill_is_capped() {
    let mut market = ResourceMarket::for_player_count(2);
    // Repeated refills converge on the per-level caps and stay there.
    for _ in 0..10 {
        market.refill();
    }
    let coal = market.available(Resource::Coal);
    market.refill();
    assert_eq!(market.available(Resource::Coal), coal);
}

#[test]
fn test_external_refill_is_capped() {
    let mut markets = ExternalMarkets::for_player_count(4);
    for _ in 0..10 {
        markets.refill();
    }
    let cotton = markets.demand(Good::Cotton);
    markets.refill();
    assert_eq!(markets.demand(Good::Cotton), cotton);
}

#[test]
fn test_purchase_prices_escalate_as_stock_drains() {
    let mut market = ResourceMarket::for_player_count(2);
    let mut last = 0;
    while market.available(Resource::Iron) > 0 {
        let price = market.lowest_price(Resource::Iron).unwrap();
        assert!(price >= last);
        last = price;
        market.purchase(Resource::Iron, 1).unwrap();
    }
}
