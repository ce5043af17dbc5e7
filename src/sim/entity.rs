//! Board entities
//!
//! An empty cell is the absence of an entity. Targets form a floor layer
//! under the solid kinds, so a Player or Boulder may stand on one.

use serde::{Deserialize, Serialize};

use super::grid::Cell;

/// Stable handle into the entity table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Boulder,
    Wall,
    /// Floor marking where a boulder belongs
    Target,
}

impl EntityKind {
    /// Solid entities block each other; at most one per cell
    #[inline]
    pub fn is_solid(self) -> bool {
        !matches!(self, EntityKind::Target)
    }

    /// Whether landing on a cell holding `floor` counts as a merge (and pops)
    #[inline]
    pub fn merges_onto(self, floor: EntityKind) -> bool {
        self == EntityKind::Boulder && floor == EntityKind::Target
    }
}

/// Destination of an in-flight move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pending {
    pub cell: Cell,
    /// Landing merges with the destination's floor entity
    pub merges: bool,
}

/// One tile on the board with its animation timers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub current: Cell,
    /// Set iff `move_ticks > 0`
    pub pending: Option<Pending>,
    /// Slide ticks remaining
    pub move_ticks: u32,
    /// Pop-in ticks remaining
    pub appear_ticks: u32,
    /// Landing bounce ticks remaining
    pub pop_ticks: u32,
}

impl Entity {
    /// A resting entity; call [`Entity::with_appear`] to pop it in
    pub fn new(id: EntityId, kind: EntityKind, current: Cell) -> Self {
        Self {
            id,
            kind,
            current,
            pending: None,
            move_ticks: 0,
            appear_ticks: 0,
            pop_ticks: 0,
        }
    }

    pub fn with_appear(mut self, ticks: u32) -> Self {
        self.appear_ticks = ticks;
        self
    }

    /// Mid-slide
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.move_ticks > 0
    }

    /// Any timer running
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.move_ticks > 0 || self.appear_ticks > 0 || self.pop_ticks > 0
    }

    /// Start sliding toward `cell`
    pub fn begin_move(&mut self, cell: Cell, merges: bool, ticks: u32) {
        debug_assert!(ticks > 0, "a move needs at least one tick");
        self.pending = Some(Pending { cell, merges });
        self.move_ticks = ticks;
    }
}
