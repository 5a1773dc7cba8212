//! Square grid of tiles.
//!
//! Tiles are stored row-major in a flat `Vec` and addressed by
//! `Coordinate`. The shape is fixed at construction.

use std::ops::{Index, IndexMut};

use super::coord::Coordinate;
use super::tile::Tile;
use super::unit::{Unit, UnitRegistry};

/// A `size × size` map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    size: usize,
    tiles: Vec<Tile>,
}

impl GameMap {
    /// Largest accepted side length. Scenario and CLI input is checked
    /// against it before a map is built.
    pub const MAX_SIZE: usize = 1024;

    /// Allocates the grid, each tile initialized with its own coordinate.
    ///
    /// `size` must not exceed `MAX_SIZE`.
    pub fn new(size: usize) -> Self {
        let mut tiles = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                tiles.push(Tile::new(Coordinate::new(x as i32, y as i32)));
            }
        }
        GameMap { size, tiles }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff both components are in `[0, size)`.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        self.index_of(coord).is_some()
    }

    fn index_of(&self, coord: Coordinate) -> Option<usize> {
        let x = usize::try_from(coord.x).ok().filter(|&x| x < self.size)?;
        let y = usize::try_from(coord.y).ok().filter(|&y| y < self.size)?;
        Some(y * self.size + x)
    }

    /// Returns the tile at `coord`, or None if out of bounds.
    pub fn tile(&self, coord: Coordinate) -> Option<&Tile> {
        self.index_of(coord).map(|i| &self.tiles[i])
    }

    pub fn tile_mut(&mut self, coord: Coordinate) -> Option<&mut Tile> {
        let i = self.index_of(coord)?;
        Some(&mut self.tiles[i])
    }

    /// Resolves a unit's tile back-reference. None if the unit is unplaced.
    pub fn tile_of(&self, unit: &Unit) -> Option<&Tile> {
        unit.tile().and_then(|pos| self.tile(pos))
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Checks the occupancy invariant against a registry: every occupant
    /// is a registered unit standing on that tile, and every placed unit
    /// appears on exactly one tile.
    pub fn is_consistent_with(&self, units: &UnitRegistry) -> bool {
        let mut seen = 0;
        for tile in &self.tiles {
            for id in tile.occupants() {
                match units.get(id) {
                    Some(u) if u.tile() == Some(tile.position()) && u.position() == tile.position() => {
                        seen += 1;
                    }
                    _ => return false,
                }
            }
        }
        seen == units.iter().filter(|u| u.is_placed()).count()
    }
}

impl Index<Coordinate> for GameMap {
    type Output = Tile;

    /// Panics if `coord` is out of bounds; check `in_bounds` first.
    fn index(&self, coord: Coordinate) -> &Tile {
        match self.tile(coord) {
            Some(tile) => tile,
            None => panic!("tile {} outside {}x{} map", coord, self.size, self.size),
        }
    }
}

impl IndexMut<Coordinate> for GameMap {
    fn index_mut(&mut self, coord: Coordinate) -> &mut Tile {
        let size = self.size;
        match self.tile_mut(coord) {
            Some(tile) => tile,
            None => panic!("tile {} outside {}x{} map", coord, size, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_know_their_own_coordinates() {
        let map = GameMap::new(5);
        assert_eq!(map.tiles().count(), 25);
        for x in 0..5 {
            for y in 0..5 {
                let c = Coordinate::new(x, y);
                assert_eq!(map[c].position(), c);
                assert!(map[c].is_empty());
            }
        }
    }

    #[test]
    fn bounds_are_half_open() {
        let map = GameMap::new(5);
        assert!(map.in_bounds(Coordinate::new(0, 0)));
        assert!(map.in_bounds(Coordinate::new(4, 4)));
        assert!(map.in_bounds(Coordinate::new(4, 0)));
        for c in [(-1, 0), (0, -1), (5, 0), (0, 5), (5, 5), (-1, -1)] {
            assert!(!map.in_bounds(c.into()), "{:?} should be out of bounds", c);
            assert!(map.tile(c.into()).is_none());
        }
    }

    #[test]
    fn empty_map_has_no_valid_coordinates() {
        let map = GameMap::new(0);
        assert!(!map.in_bounds(Coordinate::ORIGIN));
        assert_eq!(map.tiles().count(), 0);
    }

    #[test]
    fn tile_mut_edits_in_place() {
        let mut map = GameMap::new(3);
        map.tile_mut(Coordinate::new(2, 1)).unwrap().add_unit(4);
        assert!(map[Coordinate::new(2, 1)].contains(4));
        assert!(!map[Coordinate::new(1, 2)].contains(4));
    }

    #[test]
    fn consistency_detects_stray_occupants() {
        let mut map = GameMap::new(3);
        let mut units = UnitRegistry::new();
        let mut unit = Unit::new(1, "u", 0, Coordinate::ORIGIN);
        unit.place(Coordinate::new(1, 1));
        units.insert(unit);
        assert!(!map.is_consistent_with(&units));

        map[Coordinate::new(1, 1)].add_unit(1);
        assert!(map.is_consistent_with(&units));

        map[Coordinate::new(2, 2)].add_unit(1);
        assert!(!map.is_consistent_with(&units));
    }

    #[test]
    #[should_panic]
    fn indexing_out_of_bounds_panics() {
        let map = GameMap::new(2);
        let _ = &map[Coordinate::new(2, 0)];
    }
}
