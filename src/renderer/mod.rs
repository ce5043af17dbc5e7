//! Headless render glue
//!
//! Pixel geometry and draw lists for whatever actually paints the board,
//! plus a text view for terminals.

pub mod layout;
pub mod sprites;
pub mod text;

pub use layout::BoardLayout;
pub use sprites::{Sprite, draw_list};
