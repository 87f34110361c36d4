//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by pair index)
//! - No rendering or platform dependencies

pub mod character;
pub mod collision;
pub mod obstacle;
pub mod score;
pub mod state;
pub mod tick;

pub use character::Character;
pub use collision::{CollisionResult, character_pair_collision, horizontal_overlap, vertical_overlap};
pub use obstacle::{Obstacle, ObstaclePair, PairOutcome};
pub use score::ScoreCounter;
pub use state::{GameEvent, GameLoop, GamePhase};
pub use tick::tick;
