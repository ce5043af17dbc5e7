//! A generated board: its size, its entities and where the targets began

use serde::{Deserialize, Serialize};

use super::entity::EntityKind;
use super::grid::{self, Cell};
use super::table::EntityTable;
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Cells per side, perimeter included
    pub size: usize,
    pub entities: EntityTable,
    /// Target cells recorded at generation
    pub targets: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize, entities: EntityTable) -> Self {
        let targets = entities.cells_of(EntityKind::Target);
        Self {
            size,
            entities,
            targets,
        }
    }

    /// Every boulder rests on an original target cell (true with no boulders)
    pub fn is_won(&self) -> bool {
        self.entities
            .iter()
            .filter(|e| e.kind == EntityKind::Boulder)
            .all(|e| self.targets.contains(&e.current))
    }

    /// Boulders currently sitting on a target
    pub fn boulders_on_target(&self) -> usize {
        self.entities
            .iter()
            .filter(|e| e.kind == EntityKind::Boulder && self.targets.contains(&e.current))
            .count()
    }

    /// Check bounds and single occupancy of every cell
    pub fn validate(&self) -> Result<(), GameError> {
        for entity in self.entities.iter() {
            let cell = entity.current;
            if !grid::in_bounds(cell, self.size) {
                log::error!("Entity {:?} outside the board at ({}, {})", entity.id, cell.x, cell.y);
                return Err(GameError::OutOfBounds {
                    x: cell.x,
                    y: cell.y,
                });
            }
            self.entities.lookup(cell)?;
        }
        Ok(())
    }
}
