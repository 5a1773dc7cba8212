//! A single map cell and its occupants.

use std::collections::BTreeSet;

use super::coord::Coordinate;
use super::unit::UnitId;

/// A grid cell holding zero or more units.
///
/// Only the occupant set lives here. Keeping each occupant's `position`
/// and `tile` in sync with this set is the handler's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    position: Coordinate,
    occupants: BTreeSet<UnitId>,
}

impl Tile {
    pub fn new(position: Coordinate) -> Self {
        Tile {
            position,
            occupants: BTreeSet::new(),
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Inserts a unit id. Returns false if it was already present.
    pub fn add_unit(&mut self, unit_id: UnitId) -> bool {
        self.occupants.insert(unit_id)
    }

    /// Removes a unit id. Returns false if it was not present.
    pub fn remove_unit(&mut self, unit_id: UnitId) -> bool {
        self.occupants.remove(&unit_id)
    }

    pub fn contains(&self, unit_id: UnitId) -> bool {
        self.occupants.contains(&unit_id)
    }

    /// Occupant ids in ascending order.
    pub fn occupants(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.occupants.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_is_empty() {
        let tile = Tile::new(Coordinate::new(2, 1));
        assert!(tile.is_empty());
        assert_eq!(tile.position(), Coordinate::new(2, 1));
    }

    #[test]
    fn add_and_remove_units() {
        let mut tile = Tile::new(Coordinate::ORIGIN);
        assert!(tile.add_unit(63));
        assert!(tile.add_unit(7));
        assert!(!tile.add_unit(63));
        assert_eq!(tile.occupants().collect::<Vec<_>>(), vec![7, 63]);

        assert!(tile.remove_unit(63));
        assert!(!tile.remove_unit(63));
        assert!(!tile.contains(63));
        assert!(tile.contains(7));
        assert_eq!(tile.occupants().count(), 1);
    }
}
