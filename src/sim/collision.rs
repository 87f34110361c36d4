//! Collision detection between the character and an obstacle pair
//!
//! A hit needs overlap on both axes at once: the character must be outside
//! the pair's gap vertically while the pair's body spans the character's
//! column horizontally.

use crate::PlayField;
use crate::consts::{CHARACTER_HALF_WIDTH, CHARACTER_HITBOX_HEIGHT, MAX_OBSTACLE_WIDTH};

/// Result of a collision check, per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionResult {
    /// Character reaches into the top or bottom obstacle's height range
    pub vertical: bool,
    /// Character's column overlaps the pair's column
    pub horizontal: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self::default()
    }

    /// Whether a collision occurred
    #[inline]
    pub fn hit(&self) -> bool {
        self.vertical && self.horizontal
    }
}

/// Vertical test. `top_extent` and `bottom_extent` are full obstacle lengths
/// (body plus mouth) measured from their respective field edges.
#[inline]
pub fn vertical_overlap(
    character_y: f32,
    field_height: f32,
    top_extent: f32,
    bottom_extent: f32,
) -> bool {
    character_y < top_extent || character_y + CHARACTER_HITBOX_HEIGHT > field_height - bottom_extent
}

/// Horizontal test, inclusive on both edges
#[inline]
pub fn horizontal_overlap(character_center_x: f32, pair_x: f32) -> bool {
    character_center_x + CHARACTER_HALF_WIDTH >= pair_x
        && character_center_x - CHARACTER_HALF_WIDTH <= pair_x + MAX_OBSTACLE_WIDTH
}

/// Check the character against one pair at horizontal position `pair_x`
pub fn character_pair_collision(
    field: &PlayField,
    character_y: f32,
    pair_x: f32,
    top_extent: f32,
    bottom_extent: f32,
) -> CollisionResult {
    CollisionResult {
        vertical: vertical_overlap(character_y, field.height(), top_extent, bottom_extent),
        horizontal: horizontal_overlap(field.center_x(), pair_x),
    }
}
