//! Entity table
//!
//! Arena of entities addressed by `EntityId`. Position lookups scan the
//! arena; boards stay small enough that a scan beats keeping an index in
//! sync with animations.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, EntityKind};
use super::grid::{self, Cell};
use crate::error::GameError;

/// All live entities of a board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityTable {
    entities: Vec<Entity>,
    next_id: u32,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a resting entity and return its handle
    pub fn insert(&mut self, kind: EntityKind, current: Cell, appear_ticks: u32) -> EntityId {
        let id = self.next_entity_id();
        self.entities
            .push(Entity::new(id, kind, current).with_appear(appear_ticks));
        id
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// The single entity of one layer whose current cell is `cell`
    fn layer_at(&self, cell: Cell, solid: bool) -> Result<Option<&Entity>, GameError> {
        let mut found = None;
        for entity in self
            .entities
            .iter()
            .filter(|e| e.current == cell && e.kind.is_solid() == solid)
        {
            if found.is_some() {
                log::error!("Duplicate occupancy at ({}, {})", cell.x, cell.y);
                return Err(GameError::DuplicateOccupancy {
                    x: cell.x,
                    y: cell.y,
                });
            }
            found = Some(entity);
        }
        Ok(found)
    }

    /// Solid entity (Player, Boulder, Wall) at `cell`
    pub fn solid_at(&self, cell: Cell) -> Result<Option<&Entity>, GameError> {
        self.layer_at(cell, true)
    }

    /// Floor entity (Target) at `cell`
    pub fn floor_at(&self, cell: Cell) -> Result<Option<&Entity>, GameError> {
        self.layer_at(cell, false)
    }

    /// Topmost entity at `cell`: the solid one if present, else the floor
    pub fn lookup(&self, cell: Cell) -> Result<Option<&Entity>, GameError> {
        match self.solid_at(cell)? {
            Some(entity) => Ok(Some(entity)),
            None => self.floor_at(cell),
        }
    }

    /// First Player in the table
    pub fn player(&self) -> Option<&Entity> {
        self.entities.iter().find(|e| e.kind == EntityKind::Player)
    }

    /// Any entity mid-slide
    pub fn is_sliding(&self) -> bool {
        self.entities.iter().any(Entity::is_moving)
    }

    /// Any entity with a running timer
    pub fn is_animating(&self) -> bool {
        self.entities.iter().any(Entity::is_animating)
    }

    /// Presence bitmap of every current cell on a board of `size`
    pub fn occupancy(&self, size: usize) -> Vec<bool> {
        let mut cells = vec![false; size * size];
        for entity in &self.entities {
            if grid::in_bounds(entity.current, size) {
                cells[grid::index(entity.current.x, entity.current.y, size)] = true;
            }
        }
        cells
    }

    /// Current cells of all entities of `kind`
    pub fn cells_of(&self, kind: EntityKind) -> Vec<Cell> {
        self.entities
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.current)
            .collect()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    #[test]
    fn test_lookup_prefers_solid_over_floor() {
        let mut table = EntityTable::new();
        let target = table.insert(EntityKind::Target, IVec2::new(1, 1), 0);
        assert_eq!(table.lookup(IVec2::new(1, 1)).unwrap().map(|e| e.id), Some(target));

        let boulder = table.insert(EntityKind::Boulder, IVec2::new(1, 1), 0);
        assert_eq!(table.lookup(IVec2::new(1, 1)).unwrap().map(|e| e.id), Some(boulder));
        assert_eq!(table.floor_at(IVec2::new(1, 1)).unwrap().map(|e| e.id), Some(target));
        assert!(table.lookup(IVec2::new(2, 1)).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_solid_is_fatal() {
        let mut table = EntityTable::new();
        table.insert(EntityKind::Wall, IVec2::new(0, 0), 0);
        table.insert(EntityKind::Boulder, IVec2::new(0, 0), 0);

        let err = table.lookup(IVec2::new(0, 0)).unwrap_err();
        assert!(matches!(err, GameError::DuplicateOccupancy { x: 0, y: 0 }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_ids_are_stable_and_unique() {
        let mut table = EntityTable::new();
        let a = table.insert(EntityKind::Wall, IVec2::new(0, 0), 0);
        let b = table.insert(EntityKind::Player, IVec2::new(1, 1), 0);
        assert_ne!(a, b);
        assert_eq!(table.get(b).map(|e| e.kind), Some(EntityKind::Player));
        assert_eq!(table.player().map(|e| e.id), Some(b));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_occupancy_bitmap() {
        let mut table = EntityTable::new();
        table.insert(EntityKind::Wall, IVec2::new(0, 0), 0);
        table.insert(EntityKind::Player, IVec2::new(2, 1), 0);
        let cells = table.occupancy(3);
        assert_eq!(cells.iter().filter(|&&b| b).count(), 2);
        assert!(cells[0]);
        assert!(cells[grid::index(2, 1, 3)]);
    }

    #[test]
    fn test_animation_flags() {
        let mut table = EntityTable::new();
        let id = table.insert(EntityKind::Player, IVec2::new(1, 1), 3);
        assert!(table.is_animating());
        assert!(!table.is_sliding());

        if let Some(player) = table.get_mut(id) {
            player.appear_ticks = 0;
            player.begin_move(IVec2::new(1, 2), false, 5);
        }
        assert!(table.is_sliding());
    }
}
