//! Game configuration
//!
//! One immutable `Config` is built at startup (defaults, or a JSON file) and
//! handed to the game and the render glue. Nothing reads globals.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::renderer::BoardLayout;
use crate::sim::{AnimTimings, PlacementPlan};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Viewport ===
    /// Fixed viewport width (pixels)
    pub screen_width: u32,
    /// Fixed viewport height (pixels)
    pub screen_height: u32,
    /// Tile edge length (pixels, unscaled)
    pub tile_size: f32,
    /// Gap between tiles and around the board (pixels, unscaled)
    pub tile_margin: f32,

    // === Board generation ===
    /// Board size (cells per side, including the perimeter wall) at startup
    pub start_board_size: usize,
    /// Boulders (and targets) on the first level
    pub start_boulders: usize,
    /// Interior wall obstacles on the first level
    pub start_obstacles: usize,
    /// Retries on a larger board before generation is declared hopeless
    pub max_generation_retries: u32,
    /// Global scale multiplier per board growth
    pub scale_shrink: f32,
    /// Floor for the global scale
    pub min_scale: f32,
    /// RNG seed; `None` picks one from the OS
    pub seed: Option<u64>,

    // === Animation ===
    /// Slide duration (ticks)
    pub move_ticks: u32,
    /// Pop-in duration for new tiles (ticks)
    pub appear_ticks: u32,
    /// Landing bounce duration (ticks)
    pub pop_ticks: u32,
    /// Peak scale of the landing bounce
    pub pop_peak_scale: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tile_size: TILE_SIZE,
            tile_margin: TILE_MARGIN,

            start_board_size: START_BOARD_SIZE,
            start_boulders: START_BOULDERS,
            start_obstacles: START_OBSTACLES,
            max_generation_retries: MAX_GENERATION_RETRIES,
            scale_shrink: SCALE_SHRINK,
            min_scale: MIN_SCALE,
            seed: None,

            move_ticks: MOVE_TICKS,
            appear_ticks: APPEAR_TICKS,
            pop_ticks: POP_TICKS,
            pop_peak_scale: POP_PEAK_SCALE,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON config; missing fields use defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Config = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Clamp values that would stall or invert the simulation
    pub fn sanitized(mut self) -> Self {
        self.move_ticks = self.move_ticks.max(1);
        self.appear_ticks = self.appear_ticks.max(1);
        self.pop_ticks = self.pop_ticks.max(1);
        self.pop_peak_scale = self.pop_peak_scale.max(1.0);
        self.min_scale = self.min_scale.clamp(0.01, 1.0);
        self.scale_shrink = self.scale_shrink.clamp(0.01, 1.0);
        self.start_board_size = self.start_board_size.min(MAX_START_BOARD_SIZE);
        self
    }

    /// Animation durations for the per-entity state machine
    pub fn timings(&self) -> AnimTimings {
        AnimTimings {
            move_ticks: self.move_ticks,
            appear_ticks: self.appear_ticks,
            pop_ticks: self.pop_ticks,
            pop_peak_scale: self.pop_peak_scale,
        }
    }

    /// Entity counts for a difficulty level
    pub fn plan(&self, difficulty: u32) -> PlacementPlan {
        let difficulty = difficulty as usize;
        PlacementPlan {
            boulders: self.start_boulders.saturating_add(difficulty),
            obstacles: self.start_obstacles.saturating_add(difficulty / 2),
        }
    }

    /// Next global scale after the board grows by one
    pub fn shrink_scale(&self, scale: f32) -> f32 {
        (scale * self.scale_shrink).max(self.min_scale)
    }

    /// Pixel geometry for a board of `size` drawn at `scale`
    pub fn layout(&self, size: usize, scale: f32) -> BoardLayout {
        BoardLayout {
            size,
            tile_size: self.tile_size,
            tile_margin: self.tile_margin,
            scale,
            screen_width: self.screen_width as f32,
            screen_height: self.screen_height as f32,
        }
    }
}
