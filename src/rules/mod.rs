//! Rules: validation, transition handlers, orchestration, and the
//! engine facade.

pub mod apply;
pub mod engine;
pub mod error;
pub mod orchestrate;
pub mod validate;

pub use engine::{ApplyOutcome, Engine, GameSetup, PlayerSeat, SetupError};
pub use error::{EngineError, InvariantViolation, RejectReason, Rejection};
pub use validate::{check_invariants, should_game_end};
