//! Move resolution
//!
//! Turns a direction into pending destinations. The player steps onto open
//! floor or a target, or pushes a single boulder whose next cell is open
//! floor or a target. Anything else leaves the table untouched.

use super::entity::{EntityId, EntityKind};
use super::grid::{self, Cell, Direction};
use super::table::EntityTable;
use crate::error::GameError;

/// What the player would run into at a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ahead {
    /// Walkable; carries the floor entity kind if any
    Open { floor: Option<EntityKind> },
    Boulder(EntityId),
    /// Wall, off-board, or an unpushable occupant
    Blocked,
}

fn ahead(table: &EntityTable, cell: Cell, size: usize) -> Result<Ahead, GameError> {
    // Off-board cells behave like walls, so addressing never leaves the grid
    if !grid::in_bounds(cell, size) {
        return Ok(Ahead::Blocked);
    }
    Ok(match table.lookup(cell)? {
        None => Ahead::Open { floor: None },
        Some(e) if e.kind == EntityKind::Target => Ahead::Open {
            floor: Some(EntityKind::Target),
        },
        Some(e) if e.kind == EntityKind::Boulder => Ahead::Boulder(e.id),
        Some(_) => Ahead::Blocked,
    })
}

fn start_move(
    table: &mut EntityTable,
    id: EntityId,
    to: Cell,
    floor: Option<EntityKind>,
    move_ticks: u32,
) {
    if let Some(entity) = table.get_mut(id) {
        let merges = floor.is_some_and(|f| entity.kind.merges_onto(f));
        entity.begin_move(to, merges, move_ticks);
    }
}

/// Apply one player command to `table`.
///
/// Returns `Ok(true)` if something started moving. Must not be called while
/// any entity is still sliding.
pub fn resolve_move(
    table: &mut EntityTable,
    size: usize,
    dir: Direction,
    move_ticks: u32,
) -> Result<bool, GameError> {
    debug_assert!(!table.is_sliding(), "move resolved while entities are sliding");

    let Some(player) = table.player() else {
        return Ok(false);
    };
    let player_id = player.id;
    let next = player.current + dir.delta();
    let next2 = next + dir.delta();

    match ahead(table, next, size)? {
        Ahead::Open { floor } => {
            start_move(table, player_id, next, floor, move_ticks);
            log::debug!("Player moves {} to ({}, {})", dir.as_str(), next.x, next.y);
            Ok(true)
        }
        Ahead::Boulder(boulder_id) => match ahead(table, next2, size)? {
            Ahead::Open { floor } => {
                let under_player = table.floor_at(next)?.map(|e| e.kind);
                start_move(table, player_id, next, under_player, move_ticks);
                start_move(table, boulder_id, next2, floor, move_ticks);
                log::debug!(
                    "Player pushes boulder {} to ({}, {})",
                    dir.as_str(),
                    next2.x,
                    next2.y
                );
                Ok(true)
            }
            _ => Ok(false),
        },
        Ahead::Blocked => Ok(false),
    }
}
