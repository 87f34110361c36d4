//! Platform abstraction layer
//!
//! The simulation never touches a concrete presentation technology. Hosts
//! plug in through three ports:
//! - `GeometryProvider`: live play-area size
//! - `RenderingSurface`: where entity positions and banners are written
//! - `InputSource`: edge-triggered ascend events and restart requests

use std::collections::VecDeque;

/// Supplies the bounding dimensions of the play area, queried every tick
pub trait GeometryProvider {
    fn field_width(&self) -> f32;
    fn field_height(&self) -> f32;
}

/// Write side of the presentation layer
pub trait RenderingSurface {
    /// Character distance from the top of the field
    fn set_character_position(&mut self, y: f32);
    /// Pair distance from the left edge of the field
    fn set_pair_position(&mut self, pair: usize, x: f32);
    /// Body lengths of a pair's top and bottom obstacle (mouth excluded)
    fn set_obstacle_heights(&mut self, pair: usize, top: f32, bottom: f32);
    fn set_score(&mut self, score: u32);
    /// Shown while waiting for the first press of a round
    fn show_start_prompt(&mut self);
    fn show_game_over(&mut self, score: u32);
}

/// Input events consumed by a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Ascend key went down (also starts a round while idle)
    AscendPressed,
    /// Ascend key went up
    AscendReleased,
    /// Abandon the current round and wait for a new start
    Restart,
}

/// Read side of the input device
pub trait InputSource {
    /// Next pending event, if any
    fn poll(&mut self) -> Option<InputEvent>;
}

/// A play area of fixed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedField {
    pub width: f32,
    pub height: f32,
}

impl FixedField {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl GeometryProvider for FixedField {
    fn field_width(&self) -> f32 {
        self.width
    }

    fn field_height(&self) -> f32 {
        self.height
    }
}

/// Buffered input, filled by the host and drained by the session
#[derive(Debug, Default)]
pub struct InputQueue {
    events: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl InputSource for InputQueue {
    fn poll(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_field() {
        let field = FixedField::new(800.0, 500.0);
        assert_eq!(field.field_width(), 800.0);
        assert_eq!(field.field_height(), 500.0);
    }

    #[test]
    fn test_input_queue_fifo() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::AscendPressed);
        queue.push(InputEvent::AscendReleased);
        assert_eq!(queue.poll(), Some(InputEvent::AscendPressed));
        assert_eq!(queue.poll(), Some(InputEvent::AscendReleased));
        assert_eq!(queue.poll(), None);
        assert!(queue.is_empty());
    }
}
