//! Error types
//!
//! `GenerationFailure` is the only recoverable error: the turn controller
//! answers it by retrying on a larger board. Everything in `GameError` ends
//! the game.

/// The generator could not fit every requested entity on the board.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot place {requested} entities on a {size}x{size} board with {free} free interior cells")]
pub struct GenerationFailure {
    pub size: usize,
    pub requested: usize,
    pub free: usize,
}

/// Unrecoverable game errors
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    /// Board generation failed on every size up to the retry ceiling
    #[error("board generation gave up after {attempts} attempts (last size {size})")]
    RetryExhausted { attempts: u32, size: usize },

    /// Two entities of the same layer claim one cell
    #[error("cell ({x}, {y}) is claimed by more than one entity")]
    DuplicateOccupancy { x: i32, y: i32 },

    /// An entity sits outside the board
    #[error("entity at ({x}, {y}) lies outside the board")]
    OutOfBounds { x: i32, y: i32 },

    /// Config file could not be parsed
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    /// Config file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// True for errors raised by the simulation itself (as opposed to setup).
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::RetryExhausted { .. }
                | GameError::DuplicateOccupancy { .. }
                | GameError::OutOfBounds { .. }
        )
    }

    /// Copy of a fatal error, so a halted game can keep reporting it
    pub(crate) fn fatal_copy(&self) -> Option<GameError> {
        match *self {
            GameError::RetryExhausted { attempts, size } => {
                Some(GameError::RetryExhausted { attempts, size })
            }
            GameError::DuplicateOccupancy { x, y } => Some(GameError::DuplicateOccupancy { x, y }),
            GameError::OutOfBounds { x, y } => Some(GameError::OutOfBounds { x, y }),
            GameError::Config(_) | GameError::Io(_) => None,
        }
    }
}
