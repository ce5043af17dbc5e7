//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick
//! - Seeded RNG only (board generation)
//! - Results never depend on entity iteration order
//! - No rendering or platform dependencies

pub mod anim;
pub mod board;
pub mod entity;
pub mod generate;
pub mod grid;
pub mod resolve;
pub mod state;
pub mod table;
pub mod tick;

pub use anim::{AnimState, AnimTimings, Pose};
pub use board::Board;
pub use entity::{Entity, EntityId, EntityKind, Pending};
pub use generate::{PlacementPlan, generate_board, generate_with_retry, interior_cells};
pub use grid::{Cell, Direction};
pub use resolve::resolve_move;
pub use state::{Game, GamePhase};
pub use table::EntityTable;
pub use tick::{TickInput, TickOutcome};
