//! Unit movement validation and execution.
//!
//! `move_unit` is the low-level primitive: it validates, mutates, and
//! returns errors to its caller. `walk` is the command-facing entry point:
//! it turns rule violations into presenter notifications so a bad command
//! never escapes as an error, except for a malformed direction.

use tracing::{debug, warn};

use crate::board::{Coordinate, Direction, GameMap, MoveError, UnitId, UnitRegistry};
use crate::presenter::Presenter;

/// Result of a walk that did not fail with an invalid direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkOutcome {
    /// The unit moved; `walk` was notified.
    Moved { from: Coordinate, to: Coordinate },
    /// The walk was refused; the error message was notified.
    Rejected(MoveError),
}

impl WalkOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, WalkOutcome::Moved { .. })
    }
}

/// Executes movement over a borrowed map, registry, and presenter.
pub struct UnitHandler<'a, P: Presenter + ?Sized> {
    map: &'a mut GameMap,
    units: &'a mut UnitRegistry,
    presenter: &'a mut P,
}

impl<'a, P: Presenter + ?Sized> UnitHandler<'a, P> {
    pub fn new(map: &'a mut GameMap, units: &'a mut UnitRegistry, presenter: &'a mut P) -> Self {
        UnitHandler {
            map,
            units,
            presenter,
        }
    }

    /// Moves a unit to an absolute position.
    ///
    /// Fails with `UnitNotFound`, `UnitNotPlaced`, `OutOfBounds`, or
    /// `SelfMove` without touching any state. On success the unit leaves
    /// its old tile, joins the target tile, and its position and tile
    /// point at `target`.
    pub fn move_unit(&mut self, unit_id: UnitId, target: Coordinate) -> Result<(), MoveError> {
        let unit = self
            .units
            .get_mut(unit_id)
            .ok_or(MoveError::UnitNotFound { unit_id })?;
        let from = unit.tile().ok_or(MoveError::UnitNotPlaced { unit_id })?;
        if !self.map.in_bounds(target) {
            return Err(MoveError::OutOfBounds { target });
        }
        if from == target {
            return Err(MoveError::SelfMove { position: target });
        }

        self.map[from].remove_unit(unit_id);
        self.map[target].add_unit(unit_id);
        unit.place(target);

        debug!(unit_id, from = %from, to = %target, "unit moved");
        Ok(())
    }

    /// Moves a unit one step in `direction`.
    ///
    /// Unknown or unplaced units, out-of-bounds targets, and self-moves
    /// are reported through `notify_error` and returned as
    /// `Ok(WalkOutcome::Rejected)`. A direction with a component outside
    /// `{-1, 0, 1}` is returned as `Err(MoveError::InvalidDirection)` and
    /// nothing is notified.
    pub fn walk(&mut self, unit_id: UnitId, direction: Coordinate) -> Result<WalkOutcome, MoveError> {
        let from = match self.units.get(unit_id).map(|unit| unit.tile()) {
            Some(Some(tile)) => tile,
            Some(None) => return Ok(self.reject(MoveError::UnitNotPlaced { unit_id })),
            None => return Ok(self.reject(MoveError::UnitNotFound { unit_id })),
        };
        let direction = Direction::try_from(direction)?;
        let to = from + direction;

        match self.move_unit(unit_id, to) {
            Ok(()) => {
                self.presenter.notify_walk(unit_id, direction);
                Ok(WalkOutcome::Moved { from, to })
            }
            Err(err) => Ok(self.reject(err)),
        }
    }

    /// Places a unit on a tile without movement rules.
    ///
    /// Sets the unit's position and tile back-reference and adds it to the
    /// tile's occupants. A unit that already stood elsewhere is removed
    /// from that tile first.
    pub fn add_unit_to_tile(&mut self, unit_id: UnitId, tile: Coordinate) -> Result<(), MoveError> {
        if !self.map.in_bounds(tile) {
            return Err(MoveError::OutOfBounds { target: tile });
        }
        let unit = self
            .units
            .get_mut(unit_id)
            .ok_or(MoveError::UnitNotFound { unit_id })?;

        if let Some(previous) = unit.tile() {
            self.map[previous].remove_unit(unit_id);
        }
        self.map[tile].add_unit(unit_id);
        unit.place(tile);

        debug!(unit_id, tile = %tile, "unit placed");
        Ok(())
    }

    fn reject(&mut self, err: MoveError) -> WalkOutcome {
        warn!(%err, "walk rejected");
        self.presenter.notify_error(&err.to_string());
        WalkOutcome::Rejected(err)
    }
}
