//! Round score

use serde::{Deserialize, Serialize};

/// Number of obstacle pairs passed this round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCounter {
    value: u32,
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Add one point and return the new total
    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_reset() {
        let mut score = ScoreCounter::new();
        assert_eq!(score.value(), 0);
        assert_eq!(score.increment(), 1);
        assert_eq!(score.increment(), 2);
        assert_eq!(score.value(), 2);
        score.reset();
        assert_eq!(score.value(), 0);
    }
}
