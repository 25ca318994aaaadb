//! Resource and external-goods markets.
//!
//! Both market families share one mechanism: an ordered track of price
//! levels with remaining quantities, drained front-first. The resource
//! market lists prices ascending, so front-first means cheapest-first;
//! the external markets list prices descending, so front-first means
//! best-demand-first. Every drain is all-or-nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Good, Resource};

/// One market track: quantities remaining at each fixed price level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTrack {
    levels: SmallVec<[u32; 8]>,
    prices: SmallVec<[u32; 8]>,
}

impl PriceTrack {
    #[must_use]
    pub fn new(prices: &[u32], levels: &[u32]) -> Self {
        assert_eq!(prices.len(), levels.len());
        Self {
            levels: SmallVec::from_slice(levels),
            prices: SmallVec::from_slice(prices),
        }
    }

    /// Price of the first non-empty level.
    ///
    /// Returns the sentinel `last price + 1` when the track is depleted;
    /// the sentinel is for legality and cost checks, never payable.
    #[must_use]
    pub fn current_price(&self) -> u32 {
        for (level, price) in self.levels.iter().zip(&self.prices) {
            if *level > 0 {
                return *price;
            }
        }
        self.prices.last().map_or(1, |p| p + 1)
    }

    /// Price of the first non-empty level, or 0 if depleted.
    ///
    /// The zero sentinel suits sell-side tracks, where "no demand" means
    /// no income rather than a prohibitive cost.
    #[must_use]
    pub fn current_price_or_zero(&self) -> u32 {
        self.levels
            .iter()
            .zip(&self.prices)
            .find(|(level, _)| **level > 0)
            .map_or(0, |(_, price)| *price)
    }

    /// Total quantity remaining across all levels.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.levels.iter().sum()
    }

    /// Drain `amount` units front-first, returning the summed per-unit
    /// prices actually charged. All-or-nothing: if the track holds fewer
    /// than `amount` units, nothing changes and `None` is returned.
    pub fn drain(&mut self, amount: u32) -> Option<i64> {
        if amount > self.total() {
            return None;
        }

        let mut remaining = amount;
        let mut value: i64 = 0;
        for (level, price) in self.levels.iter_mut().zip(&self.prices) {
            if remaining == 0 {
                break;
            }
            let taken = (*level).min(remaining);
            value += i64::from(taken) * i64::from(*price);
            *level -= taken;
            remaining -= taken;
        }
        Some(value)
    }

    /// Add stock back per level, clamped to per-level caps.
    pub fn refill(&mut self, add: &[u32], cap: &[u32]) {
        for (i, level) in self.levels.iter_mut().enumerate() {
            let add = add.get(i).copied().unwrap_or(0);
            let cap = cap.get(i).copied().unwrap_or(*level);
            *level = (*level + add).min(cap);
        }
    }

    #[must_use]
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }
}

const RESOURCE_PRICES: [u32; 6] = [1, 2, 3, 4, 5, 6];

const COAL_LEVELS_2P: [u32; 6] = [2, 2, 2, 1, 1, 0];
const COAL_LEVELS_3P: [u32; 6] = [3, 2, 2, 2, 1, 0];
const COAL_LEVELS_4P: [u32; 6] = [3, 3, 2, 2, 1, 1];
const IRON_LEVELS_2P: [u32; 6] = [3, 3, 2, 2, 1, 0];
const IRON_LEVELS_3P: [u32; 6] = [4, 3, 3, 2, 1, 1];
const IRON_LEVELS_4P: [u32; 6] = [4, 4, 3, 3, 2, 1];

const COAL_REFILL: [u32; 6] = [1, 1, 1, 1, 0, 0];
const COAL_REFILL_CAP: [u32; 6] = [4, 4, 3, 3, 2, 1];
const IRON_REFILL: [u32; 6] = [1, 1, 1, 1, 0, 0];
const IRON_REFILL_CAP: [u32; 6] = [5, 5, 4, 4, 3, 2];

/// The coal and iron markets. Prices ascend, so drains are cheapest-first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMarket {
    coal: PriceTrack,
    iron: PriceTrack,
}

impl ResourceMarket {
    /// Market sized for the player count (2-4; other counts get the
    /// 4-player template).
    #[must_use]
    pub fn for_player_count(player_count: usize) -> Self {
        let (coal, iron) = match player_count {
            2 => (COAL_LEVELS_2P, IRON_LEVELS_2P),
            3 => (COAL_LEVELS_3P, IRON_LEVELS_3P),
            _ => (COAL_LEVELS_4P, IRON_LEVELS_4P),
        };
        Self {
            coal: PriceTrack::new(&RESOURCE_PRICES, &coal),
            iron: PriceTrack::new(&RESOURCE_PRICES, &iron),
        }
    }

    fn track(&self, resource: Resource) -> Option<&PriceTrack> {
        match resource {
            Resource::Coal => Some(&self.coal),
            Resource::Iron => Some(&self.iron),
            Resource::Beer => None,
        }
    }

    fn track_mut(&mut self, resource: Resource) -> Option<&mut PriceTrack> {
        match resource {
            Resource::Coal => Some(&mut self.coal),
            Resource::Iron => Some(&mut self.iron),
            Resource::Beer => None,
        }
    }

    /// Buy `amount` units, cheapest levels first, all-or-nothing.
    /// Beer is never market-traded and always returns `None`.
    pub fn purchase(&mut self, resource: Resource, amount: u32) -> Option<i64> {
        self.track_mut(resource)?.drain(amount)
    }

    /// Current cheapest price, or the depleted sentinel. Beer has no
    /// market price.
    #[must_use]
    pub fn lowest_price(&self, resource: Resource) -> Option<u32> {
        self.track(resource).map(PriceTrack::current_price)
    }

    /// Units remaining across all levels.
    #[must_use]
    pub fn available(&self, resource: Resource) -> u32 {
        self.track(resource).map_or(0, PriceTrack::total)
    }

    /// Market-phase restock.
    pub fn refill(&mut self) {
        self.coal.refill(&COAL_REFILL, &COAL_REFILL_CAP);
        self.iron.refill(&IRON_REFILL, &IRON_REFILL_CAP);
    }
}

const COTTON_PRICES: [u32; 7] = [8, 7, 6, 5, 4, 3, 2];
const GOODS_PRICES: [u32; 6] = [7, 6, 5, 4, 3, 2];
const POTTERY_PRICES: [u32; 5] = [10, 9, 8, 7, 6];

const COTTON_DEMAND_2P: [u32; 7] = [1, 1, 1, 1, 0, 0, 0];
const COTTON_DEMAND_3P: [u32; 7] = [2, 1, 1, 1, 1, 0, 0];
const COTTON_DEMAND_4P: [u32; 7] = [2, 2, 1, 1, 1, 1, 1];
const GOODS_DEMAND_2P: [u32; 6] = [1, 1, 1, 1, 0, 0];
const GOODS_DEMAND_3P: [u32; 6] = [2, 2, 1, 1, 1, 0];
const GOODS_DEMAND_4P: [u32; 6] = [2, 2, 2, 1, 1, 1];
const POTTERY_DEMAND_2P: [u32; 5] = [1, 1, 1, 0, 0];
const POTTERY_DEMAND_3P: [u32; 5] = [1, 1, 1, 1, 0];
const POTTERY_DEMAND_4P: [u32; 5] = [1, 1, 1, 1, 1];

const COTTON_REFILL: [u32; 7] = [1, 1, 0, 0, 0, 0, 0];
const COTTON_REFILL_CAP: [u32; 7] = [3, 3, 2, 2, 2, 1, 1];
const GOODS_REFILL: [u32; 6] = [1, 1, 1, 0, 0, 0];
const GOODS_REFILL_CAP: [u32; 6] = [3, 3, 3, 2, 2, 1];
const POTTERY_REFILL: [u32; 5] = [0, 1, 1, 0, 0];
const POTTERY_REFILL_CAP: [u32; 5] = [1, 2, 2, 1, 1];

/// External demand for cotton, manufactured goods, and pottery.
/// Prices descend, so drains consume the best-paying demand first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalMarkets {
    tracks: [PriceTrack; Good::COUNT],
}

impl ExternalMarkets {
    /// Markets sized for the player count (2-4; other counts get the
    /// 4-player template).
    #[must_use]
    pub fn for_player_count(player_count: usize) -> Self {
        let (cotton, goods, pottery): (&[u32], &[u32], &[u32]) = match player_count {
            2 => (&COTTON_DEMAND_2P, &GOODS_DEMAND_2P, &POTTERY_DEMAND_2P),
            3 => (&COTTON_DEMAND_3P, &GOODS_DEMAND_3P, &POTTERY_DEMAND_3P),
            _ => (&COTTON_DEMAND_4P, &GOODS_DEMAND_4P, &POTTERY_DEMAND_4P),
        };
        Self {
            tracks: [
                PriceTrack::new(&COTTON_PRICES, cotton),
                PriceTrack::new(&GOODS_PRICES, goods),
                PriceTrack::new(&POTTERY_PRICES, pottery),
            ],
        }
    }

    /// Sell `amount` units into the best-paying demand, all-or-nothing.
    pub fn sell(&mut self, good: Good, amount: u32) -> Option<i64> {
        self.tracks[good.index()].drain(amount)
    }

    /// Best current price, or 0 if demand is exhausted.
    #[must_use]
    pub fn highest_price(&self, good: Good) -> u32 {
        self.tracks[good.index()].current_price_or_zero()
    }

    /// Demand remaining across all levels.
    #[must_use]
    pub fn demand(&self, good: Good) -> u32 {
        self.tracks[good.index()].total()
    }

    /// Market-phase demand regrowth.
    pub fn refill(&mut self) {
        self.tracks[Good::Cotton.index()].refill(&COTTON_REFILL, &COTTON_REFILL_CAP);
        self.tracks[Good::ManufacturedGoods.index()].refill(&GOODS_REFILL, &GOODS_REFILL_CAP);
        self.tracks[Good::Pottery.index()].refill(&POTTERY_REFILL, &POTTERY_REFILL_CAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_spills_to_next_level() {
        let mut track = PriceTrack::new(&[1, 2, 3], &[2, 2, 2]);
        assert_eq!(track.drain(3), Some(2 * 1 + 1 * 2));
        assert_eq!(track.levels(), &[0, 1, 2]);
        assert_eq!(track.current_price(), 2);
    }

    #[test]
    fn test_drain_all_or_nothing() {
        let mut track = PriceTrack::new(&[1, 2], &[1, 1]);
        assert_eq!(track.drain(3), None);
        assert_eq!(track.levels(), &[1, 1]);
        assert_eq!(track.drain(2), Some(3));
        assert_eq!(track.total(), 0);
    }

    #[test]
    fn test_depleted_sentinel_price() {
        let mut track = PriceTrack::new(&[1, 2, 3], &[1, 0, 0]);
        track.drain(1).unwrap();
        assert_eq!(track.current_price(), 4);
        assert_eq!(track.current_price_or_zero(), 0);
    }

    #[test]
    fn test_refill_respects_caps() {
        let mut track = PriceTrack::new(&[1, 2], &[3, 0]);
        track.refill(&[2, 2], &[4, 1]);
        assert_eq!(track.levels(), &[4, 1]);
    }

    #[test]
    fn test_resource_market_templates() {
        let two = ResourceMarket::for_player_count(2);
        assert_eq!(two.available(Resource::Coal), 8);
        assert_eq!(two.available(Resource::Iron), 11);

        let four = ResourceMarket::for_player_count(4);
        assert_eq!(four.available(Resource::Coal), 12);
        assert_eq!(four.available(Resource::Iron), 17);
    }

    #[test]
    fn test_beer_is_not_market_traded() {
        let mut market = ResourceMarket::for_player_count(4);
        assert_eq!(market.purchase(Resource::Beer, 1), None);
        assert_eq!(market.lowest_price(Resource::Beer), None);
        assert_eq!(market.available(Resource::Beer), 0);
    }

    #[test]
    fn test_external_sell_drains_best_prices() {
        // 4-player cotton: demand [2,2,1,1,1,1,1], prices [8,7,6,5,4,3,2].
        let mut markets = ExternalMarkets::for_player_count(4);
        assert_eq!(markets.sell(Good::Cotton, 3), Some(2 * 8 + 1 * 7));
        assert_eq!(markets.highest_price(Good::Cotton), 7);
    }

    #[test]
    fn test_external_sell_all_or_nothing() {
        let mut markets = ExternalMarkets::for_player_count(2);
        let before = markets.clone();
        assert_eq!(markets.sell(Good::Pottery, 4), None);
        assert_eq!(markets, before);
    }
}
