//! Actions players and the orchestrator can take.
//!
//! A single closed enum covers both player-initiated moves and the
//! system transitions the orchestrator forces (phase end, era advance,
//! income, market refill, game end). Dispatch is an exhaustive match,
//! so adding a variant is a compile error until every handler knows
//! about it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ids::{CardId, ConnectionId, LocationId, TileId};
use super::player::PlayerId;
use super::types::{Era, Industry, Resource};

/// Where a sale's goods go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleRoute {
    /// Into the good's external market, at that market's current price.
    /// Requires a network path to a location with the matching market link.
    External,
    /// To a consuming industry in the seller's own network.
    Local,
    /// To a consuming industry reachable only through other players' links.
    Distant,
}

impl std::fmt::Display for SaleRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleRoute::External => write!(f, "external"),
            SaleRoute::Local => write!(f, "local"),
            SaleRoute::Distant => write!(f, "distant"),
        }
    }
}

/// One line item of a resource purchase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePurchase {
    pub resource: Resource,
    pub amount: u32,
}

/// Everything that can change the game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Place an industry tile at a location, paying the tile cost plus
    /// market prices for the coal and iron supplied.
    BuildIndustry {
        player: PlayerId,
        location: LocationId,
        industry: Industry,
        tile: TileId,
        /// Coal units bought from the market for this build.
        coal: u32,
        /// Iron units bought from the market for this build.
        iron: u32,
    },
    /// Build a connection between two locations.
    DevelopLocation {
        player: PlayerId,
        connection: ConnectionId,
        /// Coal units bought from the market for this build.
        coal: u32,
        /// Iron units bought from the market for this build.
        iron: u32,
    },
    /// Sell goods from an owned industry. Does not consume an action.
    SellGoods {
        player: PlayerId,
        industry: TileId,
        route: SaleRoute,
        amount: u32,
    },
    /// Take the one-time loan. Does not consume an action.
    TakeLoan { player: PlayerId },
    /// Forfeit the rest of the turn.
    Pass { player: PlayerId },
    /// Move a single card from hand to the discard pile.
    PlayCard { player: PlayerId, card: CardId },
    /// Discard cards from hand without effect.
    DiscardCards {
        player: PlayerId,
        cards: SmallVec<[CardId; 4]>,
    },
    /// Buy coal and/or iron from the resource market. Atomic: either
    /// every line item is filled or nothing changes.
    BuyResources {
        player: PlayerId,
        purchases: SmallVec<[ResourcePurchase; 2]>,
    },
    /// Close the current phase and open the next one.
    EndPhase,
    /// Reset the current player's action allowance.
    StartTurn,
    /// Hand over from the canal era to the rail era.
    AdvanceEra,
    /// Pay every player their income (or charge their shortfall).
    CalculateIncome,
    /// Refill the resource and external markets.
    UpdateMarkets,
    /// Freeze the game and compute final scores.
    EndGame,
}

impl Action {
    /// The action's kind, for logging and rejection diagnostics.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::BuildIndustry { .. } => ActionKind::BuildIndustry,
            Action::DevelopLocation { .. } => ActionKind::DevelopLocation,
            Action::SellGoods { .. } => ActionKind::SellGoods,
            Action::TakeLoan { .. } => ActionKind::TakeLoan,
            Action::Pass { .. } => ActionKind::Pass,
            Action::PlayCard { .. } => ActionKind::PlayCard,
            Action::DiscardCards { .. } => ActionKind::DiscardCards,
            Action::BuyResources { .. } => ActionKind::BuyResources,
            Action::EndPhase => ActionKind::EndPhase,
            Action::StartTurn => ActionKind::StartTurn,
            Action::AdvanceEra => ActionKind::AdvanceEra,
            Action::CalculateIncome => ActionKind::CalculateIncome,
            Action::UpdateMarkets => ActionKind::UpdateMarkets,
            Action::EndGame => ActionKind::EndGame,
        }
    }

    /// The acting player, if this is a player action.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Action::BuildIndustry { player, .. }
            | Action::DevelopLocation { player, .. }
            | Action::SellGoods { player, .. }
            | Action::TakeLoan { player }
            | Action::Pass { player }
            | Action::PlayCard { player, .. }
            | Action::DiscardCards { player, .. }
            | Action::BuyResources { player, .. } => Some(*player),
            Action::EndPhase
            | Action::StartTurn
            | Action::AdvanceEra
            | Action::CalculateIncome
            | Action::UpdateMarkets
            | Action::EndGame => None,
        }
    }
}

/// Discriminant-only view of [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    BuildIndustry,
    DevelopLocation,
    SellGoods,
    TakeLoan,
    Pass,
    PlayCard,
    DiscardCards,
    BuyResources,
    EndPhase,
    StartTurn,
    AdvanceEra,
    CalculateIncome,
    UpdateMarkets,
    EndGame,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::BuildIndustry => "build industry",
            ActionKind::DevelopLocation => "develop location",
            ActionKind::SellGoods => "sell goods",
            ActionKind::TakeLoan => "take loan",
            ActionKind::Pass => "pass",
            ActionKind::PlayCard => "play card",
            ActionKind::DiscardCards => "discard cards",
            ActionKind::BuyResources => "buy resources",
            ActionKind::EndPhase => "end phase",
            ActionKind::StartTurn => "start turn",
            ActionKind::AdvanceEra => "advance era",
            ActionKind::CalculateIncome => "calculate income",
            ActionKind::UpdateMarkets => "update markets",
            ActionKind::EndGame => "end game",
        };
        write!(f, "{name}")
    }
}

/// One applied action, as recorded in the game history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action as submitted.
    pub action: Action,
    /// Turn number when it was applied.
    pub turn: u32,
    /// Era when it was applied.
    pub era: Era,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_player_extraction() {
        let p = PlayerId::new(1);
        assert_eq!(Action::TakeLoan { player: p }.player(), Some(p));
        assert_eq!(Action::Pass { player: p }.player(), Some(p));
        assert_eq!(Action::EndPhase.player(), None);
        assert_eq!(Action::AdvanceEra.player(), None);
    }

    #[test]
    fn test_action_kind() {
        let p = PlayerId::new(0);
        let action = Action::BuyResources {
            player: p,
            purchases: SmallVec::new(),
        };
        assert_eq!(action.kind(), ActionKind::BuyResources);
        assert_eq!(format!("{}", action.kind()), "buy resources");
    }

    #[test]
    fn test_action_serde() {
        let action = Action::SellGoods {
            player: PlayerId::new(2),
            industry: TileId::new(5),
            route: SaleRoute::External,
            amount: 3,
        };
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, back);
    }
}
