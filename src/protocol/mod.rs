//! Text protocol handling.
//!
//! This module implements the line-based command parser for the main loop
//! and the JSON scenario format used to set up a session.

pub mod parser;
pub mod scenario;

pub use parser::{parse_command, Command};
pub use scenario::{load_scenario, parse_scenario, Scenario, ScenarioError, UnitSpec};
