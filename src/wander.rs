//! Random-walk simulation.
//!
//! Spawns units at random tiles and, every turn, walks each unit one step
//! in a random direction through the regular `UnitHandler`. Walks off the
//! edge are rejected by the handler exactly as live commands are. Used to
//! soak-test the occupancy invariant and as a benchmark workload.

use std::io::Write;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::board::{Coordinate, Direction, GameMap, MoveError, Unit, UnitId};
use crate::presenter::Presenter;
use crate::protocol::Scenario;
use crate::session::{Session, SpawnError};

/// Configuration for a random-walk run.
#[derive(Debug, Clone)]
pub struct WanderConfig {
    /// Side length of the square map.
    pub map_size: usize,
    /// Number of units to spawn.
    pub units: u32,
    /// Number of turns to play.
    pub turns: u32,
    /// Random seed (0 = draw one from entropy).
    pub seed: u64,
}

impl Default for WanderConfig {
    fn default() -> Self {
        WanderConfig {
            map_size: 16,
            units: 8,
            turns: 100,
            seed: 0,
        }
    }
}

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum WanderError {
    #[error("cannot spawn {units} units on an empty map")]
    EmptyMap { units: u32 },

    #[error("map size {size} exceeds the maximum of {max}")]
    MapTooLarge { size: usize, max: usize },

    #[error(transparent)]
    Spawn(#[from] SpawnError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WanderReport {
    /// The seed actually used, so a run can be replayed.
    pub seed: u64,
    pub turns: u32,
    pub walks: usize,
    pub rejections: usize,
    /// Whether the occupancy invariant held after every turn.
    pub consistent: bool,
    pub final_state: Scenario,
}

/// Counts notifications instead of rendering them.
#[derive(Debug, Default)]
struct Tally {
    walks: usize,
    errors: usize,
    last_turn: u32,
}

impl Presenter for Tally {
    fn notify_walk(&mut self, _unit_id: UnitId, _direction: Direction) {
        self.walks += 1;
    }

    fn notify_turn(&mut self, turn: u32) {
        self.last_turn = turn;
    }

    fn notify_error(&mut self, _message: &str) {
        self.errors += 1;
    }
}

/// Runs the simulation described by `config`.
pub fn run_wander(config: &WanderConfig) -> Result<WanderReport, WanderError> {
    if config.map_size > GameMap::MAX_SIZE {
        return Err(WanderError::MapTooLarge {
            size: config.map_size,
            max: GameMap::MAX_SIZE,
        });
    }
    if config.map_size == 0 && config.units > 0 {
        return Err(WanderError::EmptyMap {
            units: config.units,
        });
    }
    let seed = if config.seed == 0 {
        rand::random()
    } else {
        config.seed
    };
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new(config.map_size, Tally::default());

    let side = config.map_size as i32;
    for id in 1..=config.units {
        let at = Coordinate::new(rng.gen_range(0..side), rng.gen_range(0..side));
        session.spawn_unit(Unit::new(id, format!("wanderer-{}", id), id % 2, at), at)?;
    }
    let ids: Vec<UnitId> = session.units().ids().collect();

    let mut consistent = session.map().is_consistent_with(session.units());
    for _ in 0..config.turns {
        for &id in &ids {
            let direction = Direction::STEPS[rng.gen_range(0..Direction::STEPS.len())];
            session.unit_handler().walk(id, direction.as_coordinate())?;
        }
        let turn = session.match_handler().next_turn();
        consistent &= session.map().is_consistent_with(session.units());
        debug!(turn, "wander turn complete");
    }

    let final_state = session.snapshot();
    let tally = session.into_presenter();
    info!(
        seed,
        walks = tally.walks,
        rejections = tally.errors,
        consistent,
        "wander finished"
    );
    Ok(WanderReport {
        seed,
        turns: tally.last_turn,
        walks: tally.walks,
        rejections: tally.errors,
        consistent,
        final_state,
    })
}

/// Writes the report as pretty-printed JSON followed by a newline.
pub fn write_report<W: Write>(report: &WanderReport, out: &mut W) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
