//! Session state management.
//!
//! Owns the map, unit registry, match, and presenter, and lends them to the
//! handlers one command at a time.

use tracing::debug;

use crate::board::{Coordinate, GameMap, Match, MoveError, Unit, UnitId, UnitRegistry};
use crate::handler::{MatchHandler, UnitHandler};
use crate::presenter::Presenter;
use crate::protocol::{Command, Scenario, ScenarioError};

/// Errors raised while adding a unit to a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("unit {0} is already registered")]
    DuplicateUnit(UnitId),

    #[error(transparent)]
    Placement(#[from] MoveError),
}

/// Holds the game state between commands.
pub struct Session<P: Presenter> {
    map: GameMap,
    units: UnitRegistry,
    game_match: Match,
    presenter: P,
}

impl<P: Presenter> Session<P> {
    /// Creates a session with an empty `map_size × map_size` map at turn 0.
    pub fn new(map_size: usize, presenter: P) -> Self {
        Session {
            map: GameMap::new(map_size),
            units: UnitRegistry::new(),
            game_match: Match::default(),
            presenter,
        }
    }

    /// Builds a session from a scenario, placing every unit.
    pub fn from_scenario(scenario: &Scenario, presenter: P) -> Result<Self, ScenarioError> {
        scenario.validate()?;
        let mut session = Session::new(scenario.map_size, presenter);
        session.game_match = Match::new(scenario.turn);
        for spec in &scenario.units {
            session.spawn_unit(spec.to_unit(), spec.position)?;
        }
        debug!(
            map_size = scenario.map_size,
            units = scenario.units.len(),
            "session loaded"
        );
        Ok(session)
    }

    /// Registers a unit and places it at `at`.
    ///
    /// Nothing is registered if the id is taken or `at` is out of bounds.
    pub fn spawn_unit(&mut self, unit: Unit, at: Coordinate) -> Result<(), SpawnError> {
        let unit_id = unit.id;
        if self.units.contains(unit_id) {
            return Err(SpawnError::DuplicateUnit(unit_id));
        }
        if !self.map.in_bounds(at) {
            return Err(MoveError::OutOfBounds { target: at }.into());
        }
        self.units.insert(unit);
        self.unit_handler().add_unit_to_tile(unit_id, at)?;
        Ok(())
    }

    pub fn unit_handler(&mut self) -> UnitHandler<'_, P> {
        UnitHandler::new(&mut self.map, &mut self.units, &mut self.presenter)
    }

    pub fn match_handler(&mut self) -> MatchHandler<'_, P> {
        MatchHandler::new(&mut self.game_match, &mut self.presenter)
    }

    /// Dispatches a protocol command.
    ///
    /// Returns the errors the handlers propagate: `move` failures and
    /// invalid walk directions. `Quit` is a no-op here.
    pub fn execute(&mut self, command: Command) -> Result<(), MoveError> {
        match command {
            Command::Walk { unit_id, direction } => {
                self.unit_handler().walk(unit_id, direction)?;
            }
            Command::Move { unit_id, target } => {
                self.unit_handler().move_unit(unit_id, target)?;
            }
            Command::NextTurn => {
                self.match_handler().next_turn();
            }
            Command::Quit => {}
        }
        Ok(())
    }

    /// Snapshots the current state as a scenario.
    pub fn snapshot(&self) -> Scenario {
        Scenario::capture(&self.map, &self.units, &self.game_match)
    }

    pub fn map(&self) -> &GameMap {
        &self.map
    }

    pub fn units(&self) -> &UnitRegistry {
        &self.units
    }

    pub fn game_match(&self) -> &Match {
        &self.game_match
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
