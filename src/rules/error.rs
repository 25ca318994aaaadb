//! Error types for the two failure classes.
//!
//! Rule violations are expected, data-driven rejections: a value the
//! caller inspects, never fatal, and the state is untouched. Invariant
//! violations mean the engine itself produced an inconsistent state;
//! the transition is discarded and the prior state survives.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{CardId, ConnectionId, PlayerId, TileId};

/// Why a player action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("player not found")]
    PlayerNotFound,
    #[error("not player's turn")]
    NotPlayersTurn,
    #[error("no actions remaining")]
    NoActionsRemaining,
    #[error("game has ended")]
    GameEnded,
    #[error("location not found")]
    LocationNotFound,
    #[error("industry type not allowed at location")]
    IndustryNotAllowed,
    #[error("location is full")]
    LocationFull,
    #[error("industry tile not available")]
    TileNotAvailable,
    #[error("insufficient coal supplied")]
    InsufficientCoal,
    #[error("insufficient iron supplied")]
    InsufficientIron,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("not enough stock in market")]
    MarketDepleted,
    #[error("connection not found")]
    ConnectionNotFound,
    #[error("connection not available in current era")]
    ConnectionWrongEra,
    #[error("connection already built")]
    ConnectionAlreadyBuilt,
    #[error("no network connection to either endpoint")]
    NotInNetwork,
    #[error("industry not found or not owned by player")]
    IndustryNotOwned,
    #[error("cannot sell goods from resource industries")]
    ResourceIndustryCannotSell,
    #[error("industry already used this era")]
    IndustryFlipped,
    #[error("insufficient beer")]
    InsufficientBeer,
    #[error("not enough market demand")]
    InsufficientDemand,
    #[error("no local demand for goods")]
    NoLocalDemand,
    #[error("no accessible distant market")]
    NoDistantMarket,
    #[error("industry cannot sell to external markets")]
    CannotSellExternally,
    #[error("player already has a loan")]
    LoanOutstanding,
    #[error("card not in player's hand")]
    CardNotInHand,
    #[error("resource is not market-traded")]
    NotMarketTraded,
    #[error("era cannot advance past rail")]
    EraTerminal,
}

/// A structured rejection: the reason plus machine-readable diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejection {
    pub reason: RejectReason,
    /// Diagnostic detail values, keyed by name (e.g. "required",
    /// "available").
    pub details: FxHashMap<&'static str, i64>,
}

impl Rejection {
    #[must_use]
    pub fn new(reason: RejectReason) -> Self {
        Self {
            reason,
            details: FxHashMap::default(),
        }
    }

    /// Attach a diagnostic detail.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: i64) -> Self {
        self.details.insert(key, value);
        self
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)?;
        if !self.details.is_empty() {
            let mut pairs: Vec<_> = self.details.iter().collect();
            pairs.sort_by_key(|(k, _)| **k);
            write!(f, " (")?;
            for (i, (key, value)) in pairs.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

impl From<RejectReason> for Rejection {
    fn from(reason: RejectReason) -> Self {
        Self::new(reason)
    }
}

/// A consistency check failed after a transition. Engine bug, not a
/// player mistake; the transition's output must not be published.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{0} has negative money")]
    NegativeMoney(PlayerId),
    #[error("{0} holds more cards than the hand limit")]
    HandOverflow(PlayerId),
    #[error("duplicate built industry {0}")]
    DuplicateIndustry(TileId),
    #[error("duplicate built connection {0}")]
    DuplicateConnection(ConnectionId),
    #[error("built tile {0} still present in a pool")]
    BuiltTileStillPooled(TileId),
    #[error("card {0} appears in more than one container")]
    CardPartitionBroken(CardId),
    #[error("{0} claims connection {1} the board does not record")]
    ConnectionOwnershipMismatch(PlayerId, ConnectionId),
    #[error("current player index out of range")]
    InvalidCurrentPlayer,
}

/// Either failure class, as surfaced by [`Engine::apply`].
///
/// [`Engine::apply`]: crate::rules::Engine::apply
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    #[error("rejected: {0}")]
    Rule(#[from] Rejection),
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display_includes_details() {
        let rejection = Rejection::new(RejectReason::InsufficientFunds)
            .with("required", 12)
            .with("available", 7);
        let text = format!("{rejection}");
        assert!(text.starts_with("insufficient funds"));
        assert!(text.contains("required=12"));
        assert!(text.contains("available=7"));
    }

    #[test]
    fn test_engine_error_from_rejection() {
        let err: EngineError = Rejection::new(RejectReason::NotPlayersTurn).into();
        assert!(matches!(err, EngineError::Rule(_)));
    }
}
