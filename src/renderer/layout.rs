//! Board pixel geometry
//!
//! Board space puts cell `(x, y)` at `x*tile + (x+1)*margin`. Screen space
//! scales the board by the global scale and centers it in the viewport.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub size: usize,
    pub tile_size: f32,
    pub tile_margin: f32,
    pub scale: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl BoardLayout {
    /// Distance between neighbouring cell origins (board pixels)
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.tile_size + self.tile_margin
    }

    /// Unscaled edge length of the whole board, margins included
    pub fn board_pixels(&self) -> f32 {
        let size = self.size as f32;
        size * self.tile_size + (size + 1.0) * self.tile_margin
    }

    /// Top-left of a (possibly fractional) cell in board pixels
    pub fn cell_origin(&self, cell: Vec2) -> Vec2 {
        Vec2::splat(self.tile_margin) + cell * self.pitch()
    }

    /// Top-left of the scaled board in the viewport
    pub fn board_origin(&self) -> Vec2 {
        let extent = self.board_pixels() * self.scale;
        Vec2::new(
            (self.screen_width - extent) / 2.0,
            (self.screen_height - extent) / 2.0,
        )
    }

    /// Board pixels to viewport pixels
    pub fn to_screen(&self, board: Vec2) -> Vec2 {
        self.board_origin() + board * self.scale
    }

    /// Viewport pixels to the cell under them, if any (margins excluded)
    pub fn cell_at(&self, screen: Vec2) -> Option<Cell> {
        let board = (screen - self.board_origin()) / self.scale - Vec2::splat(self.tile_margin);
        if board.x < 0.0 || board.y < 0.0 {
            return None;
        }
        let cell = (board / self.pitch()).floor();
        let within = board - cell * self.pitch();
        if within.x >= self.tile_size || within.y >= self.tile_size {
            return None;
        }
        let cell = cell.as_ivec2();
        crate::sim::grid::in_bounds(cell, self.size).then_some(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec2;

    fn layout(scale: f32) -> BoardLayout {
        BoardLayout {
            size: 5,
            tile_size: 80.0,
            tile_margin: 4.0,
            scale,
            screen_width: 600.0,
            screen_height: 600.0,
        }
    }

    #[test]
    fn test_board_pixels() {
        // 5 * 80 + 6 * 4
        assert_eq!(layout(1.0).board_pixels(), 424.0);
    }

    #[test]
    fn test_cell_origin_matches_grid_formula() {
        let l = layout(1.0);
        assert_eq!(l.cell_origin(Vec2::new(0.0, 0.0)), Vec2::new(4.0, 4.0));
        assert_eq!(l.cell_origin(Vec2::new(2.0, 1.0)), Vec2::new(172.0, 88.0));
        assert_eq!(l.cell_origin(Vec2::new(0.5, 0.0)).x, 46.0);
    }

    #[test]
    fn test_board_centered() {
        assert_eq!(layout(1.0).board_origin(), Vec2::splat(88.0));
        let half = layout(0.5);
        assert_eq!(half.board_origin(), Vec2::splat(194.0));
        assert_eq!(half.to_screen(Vec2::splat(424.0)), Vec2::splat(406.0));
    }

    #[test]
    fn test_cell_at() {
        let l = layout(1.0);
        assert_eq!(l.cell_at(Vec2::new(88.0 + 4.0 + 1.0, 88.0 + 4.0 + 1.0)), Some(IVec2::ZERO));
        assert_eq!(l.cell_at(Vec2::new(88.0 + 172.0 + 10.0, 88.0 + 88.0)), Some(IVec2::new(2, 1)));
        // In the margin between cells
        assert_eq!(l.cell_at(Vec2::new(88.0 + 86.0, 100.0)), None);
        assert_eq!(l.cell_at(Vec2::new(10.0, 10.0)), None);
        assert_eq!(l.cell_at(Vec2::new(590.0, 300.0)), None);
    }
}
