//! Rule handlers.
//!
//! Handlers borrow externally owned game state for the duration of a
//! command and report outcomes to a `Presenter`.

pub mod match_handler;
pub mod unit_handler;

pub use match_handler::MatchHandler;
pub use unit_handler::{UnitHandler, WalkOutcome};
