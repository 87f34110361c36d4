//! Obstacle pairs
//!
//! Each pair is a top and a bottom obstacle sharing one vertical gap. Pairs
//! scroll left at a constant speed and are recycled to the right of the field
//! once they have fully left it.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::character::Character;
use super::collision::{CollisionResult, character_pair_collision};
use super::score::ScoreCounter;
use crate::PlayField;
use crate::consts::{MAX_OBSTACLE_WIDTH, MOUTH_HEIGHT, ROLLOVER_OFFSET};

/// One vertical barrier. The mouth sits at the gap-facing end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Body length, mouth excluded
    pub body_height: f32,
}

impl Obstacle {
    /// Full length including the mouth
    #[inline]
    pub fn extent(&self) -> f32 {
        self.body_height + MOUTH_HEIGHT
    }
}

/// What happened to a pair during one `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PairOutcome {
    /// The pair hit the character
    pub collided: bool,
    /// New score total if this pair passed the character
    pub scored: Option<u32>,
    /// The pair was recycled and its gap re-randomized
    pub rolled_over: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Distance of the left edge from the field's left edge (may be negative)
    pub x: f32,
    /// Vertical distance between the two mouths
    pub gap_size: f32,
    /// Pixels moved left per tick
    pub speed: f32,
    /// Mouth faces down
    pub top: Obstacle,
    /// Mouth faces up
    pub bottom: Obstacle,
    /// Already counted for the current pass
    #[serde(default)]
    scored: bool,
}

impl ObstaclePair {
    pub fn new(gap_size: f32, speed: f32) -> Self {
        Self {
            x: 0.0,
            gap_size,
            speed,
            top: Obstacle::default(),
            bottom: Obstacle::default(),
            scored: false,
        }
    }

    /// Whether this pair has been counted since it last entered the field
    pub fn is_scored(&self) -> bool {
        self.scored
    }

    /// Pick a new gap position. The top body gets a uniform length in
    /// `[0, height - gap - mouth)`; the bottom body fills the rest.
    /// Returns the new top body length.
    pub fn randomize_gap_position<R: Rng>(&mut self, field: &PlayField, rng: &mut R) -> f32 {
        let height = field.height();
        let upper = height - self.gap_size - MOUTH_HEIGHT;
        let offset = if upper > 0.0 {
            rng.random_range(0.0..upper)
        } else {
            0.0
        };
        self.set_gap_position(height, offset);
        offset
    }

    /// Place the gap so the top body is `top_body` long in a field `height` tall
    pub fn set_gap_position(&mut self, height: f32, top_body: f32) {
        self.top.body_height = top_body;
        self.bottom.body_height = height - top_body - self.gap_size;
    }

    /// Move the pair to `x` and re-arm scoring
    pub fn set_horizontal_position(&mut self, x: f32) {
        self.x = x;
        self.scored = false;
    }

    /// Collision state against `character` at the current position
    pub fn check_collision(&self, field: &PlayField, character: &Character) -> CollisionResult {
        character_pair_collision(
            field,
            character.y,
            self.x,
            self.top.extent(),
            self.bottom.extent(),
        )
    }

    /// Advance one tick: scroll, recycle, score, then test for collision
    pub fn advance<R: Rng>(
        &mut self,
        field: &PlayField,
        character: &Character,
        score: &mut ScoreCounter,
        rng: &mut R,
    ) -> PairOutcome {
        let mut outcome = PairOutcome::default();
        let before = self.x;
        let moved = before - self.speed;

        // Evaluated on the unwrapped position so a step that also recycles
        // the pair still counts.
        let line = field.score_line();
        if !self.scored && before >= line && moved < line {
            self.scored = true;
            outcome.scored = Some(score.increment());
        }

        if moved < -MAX_OBSTACLE_WIDTH {
            self.set_horizontal_position(field.width() + ROLLOVER_OFFSET);
            self.randomize_gap_position(field, rng);
            outcome.rolled_over = true;
        } else {
            self.x = moved;
        }

        outcome.collided = self.check_collision(field, character).hit();
        outcome
    }
}
