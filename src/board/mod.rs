//! Board representation and game-state types.
//!
//! Contains the core data structures for coordinates, tiles, the map,
//! units, and the match turn counter.

pub mod coord;
pub mod error;
pub mod map;
pub mod state;
pub mod tile;
pub mod unit;

pub use coord::{Coordinate, Direction};
pub use error::MoveError;
pub use map::GameMap;
pub use state::Match;
pub use tile::Tile;
pub use unit::{Unit, UnitId, UnitRegistry};
