//! Grid addressing
//!
//! Cells are `IVec2` with `x` growing right and `y` growing down. A board of
//! `size` covers `[0, size)` on both axes; linear indices are row-major.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A grid cell
pub type Cell = IVec2;

/// Player move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step in this direction
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}

/// True if `cell` lies on a board of `size`
#[inline]
pub fn in_bounds(cell: Cell, size: usize) -> bool {
    let size = size as i32;
    cell.x >= 0 && cell.y >= 0 && cell.x < size && cell.y < size
}

/// True if `cell` is on the outermost ring of the board
#[inline]
pub fn on_perimeter(cell: Cell, size: usize) -> bool {
    let last = size as i32 - 1;
    in_bounds(cell, size) && (cell.x == 0 || cell.y == 0 || cell.x == last || cell.y == last)
}

/// Row-major index of an in-bounds cell
#[inline]
pub fn index(x: i32, y: i32, size: usize) -> usize {
    x as usize + y as usize * size
}

/// Inverse of [`index`]
#[inline]
pub fn cell(index: usize, size: usize) -> Cell {
    IVec2::new((index % size) as i32, (index / size) as i32)
}
