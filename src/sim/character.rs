//! The player-controlled character
//!
//! Pinned to the horizontal center of the field; only its vertical position
//! changes. Holding ascend moves it up, otherwise it sinks.

use serde::{Deserialize, Serialize};

use crate::PlayField;
use crate::consts::CHARACTER_HEIGHT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Distance from the top of the field (pixels)
    pub y: f32,
    /// True while the ascend input is held
    pub ascending: bool,
    /// Upward displacement per tick
    pub ascend_step: f32,
    /// Downward displacement per tick
    pub descend_step: f32,
}

impl Character {
    pub fn new(ascend_step: f32, descend_step: f32) -> Self {
        Self {
            y: 0.0,
            ascending: false,
            ascend_step,
            descend_step,
        }
    }

    /// Lowest position the character can occupy in this field
    #[inline]
    pub fn floor(field: &PlayField) -> f32 {
        (field.height() - CHARACTER_HEIGHT).max(0.0)
    }

    /// Move one step up or down, clamped to the field. Returns the new position.
    pub fn advance(&mut self, field: &PlayField) -> f32 {
        let delta = if self.ascending {
            -self.ascend_step
        } else {
            self.descend_step
        };
        self.y = (self.y + delta).clamp(0.0, Self::floor(field));
        self.y
    }

    /// Place the character at half the field height
    pub fn recenter(&mut self, field: &PlayField) {
        self.y = field.height() / 2.0;
    }

    pub fn set_ascending(&mut self, ascending: bool) {
        self.ascending = ascending;
    }
}
