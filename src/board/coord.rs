//! Grid coordinates and single-step directions.
//!
//! `Coordinate` is a plain value with no range restriction; bounds are
//! always checked against a concrete `GameMap`. `Direction` is a
//! coordinate that has been validated as a legal one-tile step.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::error::MoveError;

/// A position (or offset) on the grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single-step offset with each component in `{-1, 0, 1}`.
///
/// North is `+y`. The zero vector (`STAY`) is a valid direction; walking
/// with it is rejected later as a self-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Coordinate", into = "Coordinate")]
pub struct Direction(Coordinate);

impl Direction {
    pub const STAY: Direction = Direction(Coordinate::new(0, 0));
    pub const NORTH: Direction = Direction(Coordinate::new(0, 1));
    pub const NORTH_EAST: Direction = Direction(Coordinate::new(1, 1));
    pub const EAST: Direction = Direction(Coordinate::new(1, 0));
    pub const SOUTH_EAST: Direction = Direction(Coordinate::new(1, -1));
    pub const SOUTH: Direction = Direction(Coordinate::new(0, -1));
    pub const SOUTH_WEST: Direction = Direction(Coordinate::new(-1, -1));
    pub const WEST: Direction = Direction(Coordinate::new(-1, 0));
    pub const NORTH_WEST: Direction = Direction(Coordinate::new(-1, 1));

    /// The eight non-zero steps, clockwise from north.
    pub const STEPS: [Direction; 8] = [
        Direction::NORTH,
        Direction::NORTH_EAST,
        Direction::EAST,
        Direction::SOUTH_EAST,
        Direction::SOUTH,
        Direction::SOUTH_WEST,
        Direction::WEST,
        Direction::NORTH_WEST,
    ];

    /// Validates a raw offset as a single step.
    pub fn new(dx: i32, dy: i32) -> Result<Self, MoveError> {
        Direction::try_from(Coordinate::new(dx, dy))
    }

    pub const fn dx(self) -> i32 {
        self.0.x
    }

    pub const fn dy(self) -> i32 {
        self.0.y
    }

    pub const fn as_coordinate(self) -> Coordinate {
        self.0
    }
}

fn is_step_component(v: i32) -> bool {
    (-1..=1).contains(&v)
}

impl TryFrom<Coordinate> for Direction {
    type Error = MoveError;

    fn try_from(c: Coordinate) -> Result<Self, Self::Error> {
        if is_step_component(c.x) && is_step_component(c.y) {
            Ok(Direction(c))
        } else {
            Err(MoveError::InvalidDirection(c))
        }
    }
}

impl From<Direction> for Coordinate {
    fn from(d: Direction) -> Self {
        d.0
    }
}

impl Add<Direction> for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Direction) -> Coordinate {
        self + rhs.0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
