//! Procedural board generation
//!
//! Boards are walled on the perimeter. Targets, boulders, interior walls and
//! the player are then dropped on distinct interior cells picked uniformly
//! at random. When the plan does not fit, the caller retries on a bigger
//! board via [`generate_with_retry`].

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::entity::EntityKind;
use super::grid;
use super::table::EntityTable;
use crate::error::{GameError, GenerationFailure};

/// Entity counts for one board (targets match boulders, one player)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementPlan {
    pub boulders: usize,
    /// Interior walls
    pub obstacles: usize,
}

impl PlacementPlan {
    /// Interior cells the plan needs
    pub fn total(&self) -> usize {
        self.boulders
            .saturating_mul(2)
            .saturating_add(self.obstacles)
            .saturating_add(1)
    }
}

/// Interior (non-perimeter) cell count of a board
pub fn interior_cells(size: usize) -> usize {
    let side = size.saturating_sub(2);
    side.saturating_mul(side)
}

/// Generate one board of `size`, or fail if the plan cannot fit
pub fn generate_board<R: Rng>(
    size: usize,
    plan: &PlacementPlan,
    appear_ticks: u32,
    rng: &mut R,
) -> Result<Board, GenerationFailure> {
    let free = interior_cells(size);
    let requested = plan.total();
    if requested > free {
        return Err(GenerationFailure {
            size,
            requested,
            free,
        });
    }

    let mut entities = EntityTable::new();
    let mut available = Vec::with_capacity(free);
    for i in 0..size * size {
        let cell = grid::cell(i, size);
        if grid::on_perimeter(cell, size) {
            entities.insert(EntityKind::Wall, cell, appear_ticks);
        } else {
            available.push(i);
        }
    }

    let placements = [
        (EntityKind::Target, plan.boulders),
        (EntityKind::Boulder, plan.boulders),
        (EntityKind::Wall, plan.obstacles),
        (EntityKind::Player, 1),
    ];
    for (kind, count) in placements {
        for _ in 0..count {
            // Sampling without replacement; the size check above guarantees stock
            let pick = available.swap_remove(rng.random_range(0..available.len()));
            entities.insert(kind, grid::cell(pick, size), appear_ticks);
        }
    }

    log::info!(
        "Generated {}x{} board: {} boulders, {} obstacles",
        size,
        size,
        plan.boulders,
        plan.obstacles
    );
    Ok(Board::new(size, entities))
}

/// Try `attempt` at `start_size`, growing the size by one after each
/// failure. Gives up with `RetryExhausted` once `max_retries` retries have
/// failed. Returns the board and how many times the size grew.
pub fn generate_with_retry<F>(
    start_size: usize,
    max_retries: u32,
    mut attempt: F,
) -> Result<(Board, u32), GameError>
where
    F: FnMut(usize) -> Result<Board, GenerationFailure>,
{
    let mut size = start_size;
    let mut retries = 0;
    loop {
        match attempt(size) {
            Ok(board) => return Ok((board, retries)),
            Err(failure) => {
                if retries >= max_retries {
                    log::error!("Board generation exhausted after {} attempts", retries + 1);
                    return Err(GameError::RetryExhausted {
                        attempts: retries + 1,
                        size,
                    });
                }
                log::warn!("{}; retrying at size {}", failure, size + 1);
                retries += 1;
                size = size.saturating_add(1);
            }
        }
    }
}
