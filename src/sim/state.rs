//! Game state
//!
//! Owns the current board plus the counters that outlive it: difficulty
//! level, board size and the global render scale.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::anim::AnimTimings;
use super::board::Board;
use super::generate::{generate_board, generate_with_retry};
use crate::config::Config;
use crate::error::GameError;
use crate::renderer::BoardLayout;
use crate::ui::Widgets;

/// Whether the game can take a move right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Nothing is sliding
    AwaitingInput,
    /// At least one entity is sliding
    Animating,
    /// A fatal error halted the game; every later tick reports it
    Failed,
}

/// Complete game state
pub struct Game {
    pub(crate) config: Config,
    pub(crate) timings: AnimTimings,
    /// Seed the RNG started from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub board: Board,
    /// Difficulty level; +1 per solved board
    pub level: u32,
    /// Board size for the next generation; only ever grows
    pub board_size: usize,
    /// Global render scale; shrinks as the board grows
    pub scale: f32,
    pub(crate) widgets: Widgets,
    /// Fatal error that halted the game
    pub(crate) failure: Option<GameError>,
}

impl Game {
    /// Start a new game at level 0
    pub fn new(config: Config) -> Result<Self, GameError> {
        let config = config.sanitized();
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        log::info!("New game (seed {})", seed);

        let mut rng = Pcg32::seed_from_u64(seed);
        let (board, growths) = build_board(&config, 0, config.start_board_size, &mut rng)?;

        let mut scale = 1.0;
        for _ in 0..growths {
            scale = config.shrink_scale(scale);
        }

        Ok(Self {
            timings: config.timings(),
            widgets: Widgets::standard(config.tile_size * 0.6),
            seed,
            rng,
            board_size: board.size,
            board,
            level: 0,
            scale,
            config,
            failure: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn timings(&self) -> &AnimTimings {
        &self.timings
    }

    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut Widgets {
        &mut self.widgets
    }

    pub fn phase(&self) -> GamePhase {
        if self.failure.is_some() {
            GamePhase::Failed
        } else if self.board.entities.is_sliding() {
            GamePhase::Animating
        } else {
            GamePhase::AwaitingInput
        }
    }

    /// Pixel geometry of the current board
    pub fn layout(&self) -> BoardLayout {
        self.config.layout(self.board.size, self.scale)
    }

    /// The error that halted the game, if any
    pub fn failure(&self) -> Option<&GameError> {
        self.failure.as_ref()
    }

    /// Replace the board with a fresh one for the current level and size
    pub fn regenerate(&mut self) -> Result<(), GameError> {
        self.regenerate_at(self.level, self.board_size, self.scale)
    }

    /// Grow the board by one cell per side, shrink the render scale and
    /// regenerate
    pub fn resize(&mut self) -> Result<(), GameError> {
        let scale = self.config.shrink_scale(self.scale);
        self.regenerate_at(self.level, self.board_size.saturating_add(1), scale)
    }

    /// Move on to the next difficulty level
    pub fn advance_level(&mut self) -> Result<(), GameError> {
        self.regenerate_at(self.level + 1, self.board_size, self.scale)
    }

    /// Generate for `level` and `size`; counters change only on success
    fn regenerate_at(&mut self, level: u32, size: usize, scale: f32) -> Result<(), GameError> {
        let (board, growths) = build_board(&self.config, level, size, &mut self.rng)?;
        let mut scale = scale;
        for _ in 0..growths {
            scale = self.config.shrink_scale(scale);
        }
        self.level = level;
        self.board_size = board.size;
        self.scale = scale;
        self.board = board;
        Ok(())
    }
}

fn build_board(
    config: &Config,
    level: u32,
    size: usize,
    rng: &mut Pcg32,
) -> Result<(Board, u32), GameError> {
    let plan = config.plan(level);
    let (board, growths) = generate_with_retry(size, config.max_generation_retries, |size| {
        generate_board(size, &plan, config.appear_ticks, rng)
    })?;
    board.validate()?;
    log::info!(
        "Level {} on a {}x{} board",
        level,
        board.size,
        board.size
    );
    Ok((board, growths))
}
