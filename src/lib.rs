//! Pipe Glider - A side-scrolling arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (character, obstacles, scoring, game loop)
//! - `platform`: Ports to the host (geometry, rendering surface, input)
//! - `session`: Round lifecycle and fixed-interval tick scheduling
//! - `settings`: Tunable gameplay options

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::GameSession;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants (pixel equivalents)
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation timestep
    pub const TICK_INTERVAL: Duration = Duration::from_millis(5);
    /// Maximum ticks per update call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 64;

    /// Number of obstacle pairs cycling through the field
    pub const PAIR_COUNT: usize = 4;
    /// Extra length at the gap-facing end of every obstacle
    pub const MOUTH_HEIGHT: f32 = 30.0;
    /// Widest rendered part of an obstacle (the mouth)
    pub const MAX_OBSTACLE_WIDTH: f32 = 120.0;
    /// Distance past the right edge where a rolled-over pair re-enters
    pub const ROLLOVER_OFFSET: f32 = 500.0;

    /// Character bounding height: 50px sprite plus 4px border
    pub const CHARACTER_HEIGHT: f32 = 54.0;
    /// Height of the sprite alone; collisions ignore the border
    pub const CHARACTER_HITBOX_HEIGHT: f32 = 50.0;
    pub const CHARACTER_HALF_WIDTH: f32 = 30.0;
}

/// Snapshot of the play area size, taken from a `GeometryProvider` each tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayField {
    pub size: Vec2,
}

impl PlayField {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    /// Read the current size from a geometry provider
    pub fn from_provider<G: platform::GeometryProvider + ?Sized>(provider: &G) -> Self {
        Self::new(provider.field_width(), provider.field_height())
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Horizontal center of the field; the character is pinned here
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Left edge of the character; a pair scores when it passes this line
    #[inline]
    pub fn score_line(&self) -> f32 {
        self.center_x() - consts::CHARACTER_HALF_WIDTH
    }
}
