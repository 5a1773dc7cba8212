//! JSON scenario files.
//!
//! A scenario describes the initial state handed to a `Session`: the map
//! size, the starting turn, and the units with their starting tiles.
//!
//! ```json
//! { "map_size": 5, "turn": 0,
//!   "units": [ { "id": 63, "name": "foo", "owner": 0, "position": { "x": 0, "y": 0 } } ] }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Coordinate, GameMap, Match, Unit, UnitId, UnitRegistry};
use crate::session::SpawnError;

/// Errors that can occur while loading or applying a scenario.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to place unit: {0}")]
    Spawn(#[from] SpawnError),

    #[error("map size {size} exceeds the maximum of {max}")]
    MapTooLarge { size: usize, max: usize },

    #[error("starting turn {0} leaves no room to advance")]
    TurnOutOfRange(u32),
}

/// One unit entry in a scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSpec {
    pub id: UnitId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub owner: u32,
    pub position: Coordinate,
}

impl UnitSpec {
    pub fn to_unit(&self) -> Unit {
        Unit::new(self.id, self.name.clone(), self.owner, self.position)
    }
}

/// Serialized initial state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub map_size: usize,
    #[serde(default)]
    pub turn: u32,
    #[serde(default)]
    pub units: Vec<UnitSpec>,
}

impl Default for Scenario {
    /// A 5x5 map with unit 1 at the origin.
    fn default() -> Self {
        Scenario {
            map_size: 5,
            turn: 0,
            units: vec![UnitSpec {
                id: 1,
                name: "scout".to_string(),
                owner: 0,
                position: Coordinate::ORIGIN,
            }],
        }
    }
}

impl Scenario {
    /// Snapshots live state. Unplaced units are recorded at their
    /// intended position.
    pub fn capture(map: &GameMap, units: &UnitRegistry, game_match: &Match) -> Self {
        Scenario {
            map_size: map.size(),
            turn: game_match.turn(),
            units: units
                .iter()
                .map(|u| UnitSpec {
                    id: u.id,
                    name: u.name.clone(),
                    owner: u.owner,
                    position: u.position(),
                })
                .collect(),
        }
    }

    /// Checks the header fields before any state is built from them.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.map_size > GameMap::MAX_SIZE {
            return Err(ScenarioError::MapTooLarge {
                size: self.map_size,
                max: GameMap::MAX_SIZE,
            });
        }
        if self.turn >= Match::MAX_TURN {
            return Err(ScenarioError::TurnOutOfRange(self.turn));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, ScenarioError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Parses and validates a scenario from a JSON string.
pub fn parse_scenario(json: &str) -> Result<Scenario, ScenarioError> {
    let scenario: Scenario = serde_json::from_str(json)?;
    scenario.validate()?;
    Ok(scenario)
}

/// Reads and parses a scenario file.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
    let text = fs::read_to_string(path)?;
    parse_scenario(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_scenario() {
        let json = r#"{
            "map_size": 8,
            "turn": 3,
            "units": [
                { "id": 63, "name": "foo", "owner": 0, "position": { "x": 0, "y": 0 } },
                { "id": 7, "name": "bar", "owner": 1, "position": { "x": 4, "y": 6 } }
            ]
        }"#;
        let scenario = parse_scenario(json).unwrap();
        assert_eq!(scenario.map_size, 8);
        assert_eq!(scenario.turn, 3);
        assert_eq!(scenario.units.len(), 2);
        assert_eq!(scenario.units[1].position, Coordinate::new(4, 6));
        assert_eq!(scenario.units[1].to_unit().name, "bar");
    }

    #[test]
    fn optional_fields_default() {
        let scenario =
            parse_scenario(r#"{ "map_size": 3, "units": [ { "id": 1, "position": { "x": 2, "y": 2 } } ] }"#)
                .unwrap();
        assert_eq!(scenario.turn, 0);
        assert_eq!(scenario.units[0].name, "");
        assert_eq!(scenario.units[0].owner, 0);

        let empty = parse_scenario(r#"{ "map_size": 3 }"#).unwrap();
        assert!(empty.units.is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            parse_scenario("{ map_size: }"),
            Err(ScenarioError::Json(_))
        ));
        assert!(matches!(
            parse_scenario(r#"{ "turn": 1 }"#),
            Err(ScenarioError::Json(_))
        ));
    }

    #[test]
    fn oversized_map_is_rejected() {
        let err = parse_scenario(r#"{ "map_size": 1025 }"#).unwrap_err();
        assert!(matches!(
            err,
            ScenarioError::MapTooLarge { size: 1025, max: 1024 }
        ));
        assert!(parse_scenario(r#"{ "map_size": 1024 }"#).is_ok());
    }

    #[test]
    fn last_turn_is_rejected() {
        let err = parse_scenario(r#"{ "map_size": 2, "turn": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, ScenarioError::TurnOutOfRange(u32::MAX)));
        assert_eq!(
            parse_scenario(r#"{ "map_size": 2, "turn": 4294967294 }"#).unwrap().turn,
            u32::MAX - 1
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_scenario("/nonexistent/tilewalk/scenario.json").unwrap_err();
        assert!(matches!(err, ScenarioError::Io(_)));
    }

    #[test]
    fn to_json_round_trips() {
        let scenario = Scenario::default();
        let json = scenario.to_json().unwrap();
        assert_eq!(parse_scenario(&json).unwrap(), scenario);
    }
}
