//! Per-entity animation state machine
//!
//! Each tick an entity drains exactly one timer, in priority order:
//! slide, then appear, then pop. Poses are read-only views of those timers
//! for the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Animation durations (ticks) and bounce height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimTimings {
    pub move_ticks: u32,
    pub appear_ticks: u32,
    pub pop_ticks: u32,
    pub pop_peak_scale: f32,
}

impl Default for AnimTimings {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            move_ticks: MOVE_TICKS,
            appear_ticks: APPEAR_TICKS,
            pop_ticks: POP_TICKS,
            pop_peak_scale: POP_PEAK_SCALE,
        }
    }
}

/// Which timer currently drives an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimState {
    Sliding,
    Appearing,
    Popping,
    Idle,
}

/// Interpolated transform of an entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Offset from the current cell, in cells
    pub offset: Vec2,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        offset: Vec2::ZERO,
        scale: 1.0,
    };
}

#[inline]
fn lerp(a: f32, b: f32, rate: f32) -> f32 {
    a * (1.0 - rate) + b * rate
}

impl Entity {
    pub fn anim_state(&self) -> AnimState {
        if self.move_ticks > 0 {
            AnimState::Sliding
        } else if self.appear_ticks > 0 {
            AnimState::Appearing
        } else if self.pop_ticks > 0 {
            AnimState::Popping
        } else {
            AnimState::Idle
        }
    }

    /// Advance one tick
    pub fn advance(&mut self, timings: &AnimTimings) {
        match self.anim_state() {
            AnimState::Sliding => {
                self.move_ticks -= 1;
                if self.move_ticks == 0 {
                    if let Some(pending) = self.pending.take() {
                        self.current = pending.cell;
                        if pending.merges {
                            self.pop_ticks = timings.pop_ticks;
                        }
                    }
                }
            }
            AnimState::Appearing => self.appear_ticks -= 1,
            AnimState::Popping => self.pop_ticks -= 1,
            AnimState::Idle => {}
        }
    }

    /// Current interpolated transform
    pub fn pose(&self, timings: &AnimTimings) -> Pose {
        match self.anim_state() {
            AnimState::Sliding => {
                let rate = 1.0 - self.move_ticks as f32 / timings.move_ticks.max(1) as f32;
                let delta = self
                    .pending
                    .map(|p| (p.cell - self.current).as_vec2())
                    .unwrap_or(Vec2::ZERO);
                Pose {
                    offset: delta * rate.clamp(0.0, 1.0),
                    scale: 1.0,
                }
            }
            AnimState::Appearing => {
                let rate = 1.0 - self.appear_ticks as f32 / timings.appear_ticks.max(1) as f32;
                Pose {
                    offset: Vec2::ZERO,
                    scale: lerp(0.0, 1.0, rate.clamp(0.0, 1.0)),
                }
            }
            AnimState::Popping => Pose {
                offset: Vec2::ZERO,
                scale: lerp(1.0, timings.pop_peak_scale, pop_rate(self.pop_ticks, timings.pop_ticks)),
            },
            AnimState::Idle => Pose::REST,
        }
    }
}

/// Triangular envelope: 0 -> 1 over the first third of the countdown, then
/// back to 0 over the remaining two thirds
fn pop_rate(remaining: u32, full: u32) -> f32 {
    let full = full.max(1);
    let breakpoint = full * 2 / 3;
    let rate = if remaining >= breakpoint {
        let rise = (full / 3).max(1);
        1.0 - (remaining - breakpoint) as f32 / rise as f32
    } else {
        remaining as f32 / breakpoint.max(1) as f32
    };
    rate.clamp(0.0, 1.0)
}
