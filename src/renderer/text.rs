//! Plain-text board view for terminals and logs
//!
//! `#` wall, `@` player, `o` boulder, `.` target, `*` boulder on target,
//! `+` player on target, space for open floor.

use crate::sim::{Board, EntityKind, grid};

fn symbol(solid: Option<EntityKind>, on_target: bool) -> char {
    match (solid, on_target) {
        (Some(EntityKind::Wall), _) => '#',
        (Some(EntityKind::Player), false) => '@',
        (Some(EntityKind::Player), true) => '+',
        (Some(EntityKind::Boulder), false) => 'o',
        (Some(EntityKind::Boulder), true) => '*',
        (_, true) => '.',
        (_, false) => ' ',
    }
}

/// Render resting positions, one line per row
pub fn render(board: &Board) -> String {
    let size = board.size;
    let mut solids = vec![None; size * size];
    let mut targets = vec![false; size * size];
    for entity in board.entities.iter() {
        if !grid::in_bounds(entity.current, size) {
            continue;
        }
        let i = grid::index(entity.current.x, entity.current.y, size);
        if entity.kind.is_solid() {
            solids[i] = Some(entity.kind);
        } else {
            targets[i] = true;
        }
    }

    let mut out = String::with_capacity(size * (size + 1));
    for y in 0..size {
        for x in 0..size {
            let i = x + y * size;
            out.push(symbol(solids[i], targets[i]));
        }
        out.push('\n');
    }
    out
}
