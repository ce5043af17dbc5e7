//! Clickable widgets
//!
//! Widgets sit outside the grid and turn completed click/tap gestures into
//! `Command`s for the game. They hold no state of their own.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Commands a widget can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// New board at the current size and level
    Restart,
    /// Grow the board by one and regenerate
    Resize,
    Quit,
}

/// A completed click or tap gesture, in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Click {
    pub start: Vec2,
    pub end: Vec2,
}

/// A screen region that issues a command when clicked
pub trait Clickable {
    fn contains(&self, point: Vec2) -> bool;
    fn command(&self) -> Command;
}

/// Axis-aligned rectangular button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Button {
    pub min: Vec2,
    pub size: Vec2,
    pub command: Command,
}

impl Button {
    pub fn new(min: Vec2, size: Vec2, command: Command) -> Self {
        Self { min, size, command }
    }
}

impl Clickable for Button {
    fn contains(&self, point: Vec2) -> bool {
        let max = self.min + self.size;
        point.x >= self.min.x && point.y >= self.min.y && point.x < max.x && point.y < max.y
    }

    fn command(&self) -> Command {
        self.command
    }
}

/// Widgets ordered back to front
#[derive(Default)]
pub struct Widgets {
    items: Vec<Box<dyn Clickable>>,
}

impl Widgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart button in the top-left corner of the viewport
    pub fn standard(button_size: f32) -> Self {
        let mut widgets = Self::new();
        widgets.push(Button::new(
            Vec2::splat(8.0),
            Vec2::splat(button_size),
            Command::Restart,
        ));
        widgets
    }

    /// Add a widget in front of the existing ones
    pub fn push(&mut self, widget: impl Clickable + 'static) {
        self.items.push(Box::new(widget));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the frontmost widget under `point`
    fn topmost(&self, point: Vec2) -> Option<usize> {
        // Widgets are stored back to front, so search in reverse
        self.items.iter().rposition(|w| w.contains(point))
    }

    /// Command for a gesture that starts and ends on the same widget
    pub fn dispatch(&self, click: &Click) -> Option<Command> {
        let start = self.topmost(click.start)?;
        if self.topmost(click.end)? != start {
            return None;
        }
        Some(self.items[start].command())
    }
}
