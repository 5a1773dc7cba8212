//! Units and the registry that owns them.
//!
//! A unit's tile back-reference is the coordinate of the tile it occupies,
//! resolved through the `GameMap` when needed.

use std::collections::BTreeMap;

use super::coord::Coordinate;

/// Unique key of a unit in its registry.
pub type UnitId = u32;

/// A unit on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
    pub owner: u32,
    position: Coordinate,
    tile: Option<Coordinate>,
}

impl Unit {
    /// Creates an unplaced unit. `position` is where it is intended to be
    /// placed; it has no tile until a handler places it.
    pub fn new(id: UnitId, name: impl Into<String>, owner: u32, position: Coordinate) -> Self {
        Unit {
            id,
            name: name.into(),
            owner,
            position,
            tile: None,
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Coordinate of the occupied tile, or None if not yet placed.
    pub fn tile(&self) -> Option<Coordinate> {
        self.tile
    }

    pub fn is_placed(&self) -> bool {
        self.tile.is_some()
    }

    /// Points both the position and the tile back-reference at `tile`.
    pub(crate) fn place(&mut self, tile: Coordinate) {
        self.position = tile;
        self.tile = Some(tile);
    }
}

/// Owning `UnitId -> Unit` container with ascending-id iteration.
#[derive(Debug, Clone, Default)]
pub struct UnitRegistry {
    units: BTreeMap<UnitId, Unit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a unit. Returns false if the id is already taken.
    pub fn insert(&mut self, unit: Unit) -> bool {
        if self.units.contains_key(&unit.id) {
            return false;
        }
        self.units.insert(unit.id, unit);
        true
    }

    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(&id)
    }

    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(&id)
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
