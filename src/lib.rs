//! Sisyphos - a boulder-pushing grid puzzle
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, entities, moves, animation, boards, turns)
//! - `renderer`: Headless render glue (pixel layout, draw lists, text view)
//! - `ui`: Clickable widgets dispatching game commands
//! - `config`: Immutable game configuration

pub mod config;
pub mod error;
pub mod renderer;
pub mod sim;
pub mod ui;

pub use config::Config;
pub use error::{GameError, GenerationFailure};

/// Game configuration defaults
pub mod consts {
    /// Fixed viewport dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 600;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Tile geometry (pixels, before global scale)
    pub const TILE_SIZE: f32 = 80.0;
    pub const TILE_MARGIN: f32 = 4.0;

    /// Board sizing and difficulty
    pub const START_BOARD_SIZE: usize = 5;
    pub const START_BOULDERS: usize = 2;
    pub const START_OBSTACLES: usize = 1;
    /// Largest board a config may start on
    pub const MAX_START_BOARD_SIZE: usize = 64;

    /// Animation durations in ticks
    pub const MOVE_TICKS: u32 = 5;
    pub const APPEAR_TICKS: u32 = 6;
    pub const POP_TICKS: u32 = 6;
    /// Peak scale of the landing bounce
    pub const POP_PEAK_SCALE: f32 = 1.2;

    /// Scale multiplier applied each time the board grows
    pub const SCALE_SHRINK: f32 = 0.9;
    /// Smallest legible global scale
    pub const MIN_SCALE: f32 = 0.4;
    /// Generation retries before giving up
    pub const MAX_GENERATION_RETRIES: u32 = 100;
}
