//! Draw list generation
//!
//! Converts entity poses into screen-space sprites, floor layer first so
//! boulders and the player draw over targets.

use glam::Vec2;

use super::layout::BoardLayout;
use crate::sim::{AnimTimings, Board, EntityKind};

/// One tile to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: EntityKind,
    /// Tile center in viewport pixels
    pub center: Vec2,
    /// Tile edge length in viewport pixels (global scale and pose scale applied)
    pub size: f32,
}

/// Sprites for every entity on `board`, back to front
pub fn draw_list(board: &Board, layout: &BoardLayout, timings: &AnimTimings) -> Vec<Sprite> {
    let mut sprites: Vec<Sprite> = board
        .entities
        .iter()
        .map(|entity| {
            let pose = entity.pose(timings);
            let origin = layout.cell_origin(entity.current.as_vec2() + pose.offset);
            let center = origin + Vec2::splat(layout.tile_size / 2.0);
            Sprite {
                kind: entity.kind,
                center: layout.to_screen(center),
                size: layout.tile_size * layout.scale * pose.scale,
            }
        })
        .collect();
    // Stable sort keeps table order within a layer
    sprites.sort_by_key(|s| s.kind.is_solid());
    sprites
}
