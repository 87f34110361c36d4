//! Fixed timestep simulation tick
//!
//! Core game loop step that advances a round deterministically.

use super::state::{GameEvent, GameLoop};
use crate::PlayField;

/// Advance a running round by one tick.
///
/// The character moves first, then every pair in index order. All pairs
/// advance even when an earlier one collides; the round halts once the tick
/// completes. Does nothing unless the round is running.
pub fn tick(state: &mut GameLoop, field: &PlayField) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    state.time_ticks += 1;
    state.character.advance(field);

    let mut collided = false;
    for (index, pair) in state.pairs.iter_mut().enumerate() {
        let outcome = pair.advance(field, &state.character, &mut state.score, &mut state.rng);

        if let Some(score) = outcome.scored {
            log::debug!("Pair {} passed, score {}", index, score);
            events.push(GameEvent::Scored { pair: index, score });
        }
        if outcome.rolled_over {
            log::debug!(
                "Pair {} rolled over to x={} (top body {:.1})",
                index,
                pair.x,
                pair.top.body_height
            );
            events.push(GameEvent::GapRandomized { pair: index });
        }
        if outcome.collided {
            events.push(GameEvent::Collision { pair: index });
            collided = true;
        }
    }

    if collided && state.halt() {
        events.push(GameEvent::GameOver {
            score: state.score.value(),
        });
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::consts::{MOUTH_HEIGHT, ROLLOVER_OFFSET};
    use crate::sim::GamePhase;

    fn field() -> PlayField {
        PlayField::new(800.0, 500.0)
    }

    /// A running round with every gap at top body 100 (gap spans 130..320)
    fn running(seed: u64) -> GameLoop {
        let field = field();
        let mut state = GameLoop::new(Settings::default(), seed);
        state.start(&field);
        for pair in &mut state.pairs {
            pair.set_gap_position(field.height(), 100.0);
        }
        state
    }

    #[test]
    fn test_tick_idle_is_noop() {
        let mut state = GameLoop::new(Settings::default(), 1);
        assert!(tick(&mut state, &field()).is_empty());
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_tick_moves_everything() {
        let field = field();
        let mut state = running(1);
        let before: Vec<f32> = state.pairs.iter().map(|p| p.x).collect();

        let events = tick(&mut state, &field);
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, 1);
        // Start leaves the character ascending
        assert_eq!(state.character.y, 247.0);
        for (pair, x) in state.pairs.iter().zip(before) {
            assert_eq!(pair.x, x - 1.0);
        }
    }

    #[test]
    fn test_score_when_first_pair_passes() {
        let field = field();
        let mut state = running(2);
        // Two ascends (-6) then three descends (+6) keep the character in the gap
        state.character.y = 200.0;

        // First pair starts at 800 and passes the line at 370 after 431 ticks
        let mut scored_at = None;
        for t in 1..=431 {
            state.character.set_ascending(t % 5 < 2);
            let events = tick(&mut state, &field);
            assert_eq!(state.phase, GamePhase::Running, "collided at tick {}", t);
            if events.contains(&GameEvent::Scored { pair: 0, score: 1 }) {
                scored_at = Some(t);
            }
        }
        assert_eq!(scored_at, Some(431));
        assert_eq!(state.score.value(), 1);
    }

    #[test]
    fn test_collision_halts_round() {
        let field = field();
        let mut state = running(3);
        // Park the first pair just right of the character, above the gap
        state.pairs[0].set_horizontal_position(431.0);
        state.character.y = 0.0;

        let events = tick(&mut state, &field);
        assert!(events.contains(&GameEvent::Collision { pair: 0 }));
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 0 }));
        assert_eq!(state.phase, GamePhase::Halted);

        // Further ticks do nothing
        let x = state.pairs[1].x;
        assert!(tick(&mut state, &field).is_empty());
        assert_eq!(state.pairs[1].x, x);
    }

    #[test]
    fn test_collision_keeps_other_side_effects() {
        let field = field();
        let mut state = running(4);
        state.character.y = 0.0;
        state.pairs[0].set_horizontal_position(431.0);
        // Pair 1 passes the line on the same tick
        state.pairs[1].set_horizontal_position(370.0);
        state.pairs[1].set_gap_position(field.height(), 0.0);
        let x3 = state.pairs[3].x;

        let events = tick(&mut state, &field);
        assert_eq!(state.phase, GamePhase::Halted);
        assert!(events.contains(&GameEvent::Scored { pair: 1, score: 1 }));
        assert_eq!(state.score.value(), 1);
        assert_eq!(state.pairs[3].x, x3 - 1.0);
        assert_eq!(events.last(), Some(&GameEvent::GameOver { score: 1 }));
    }

    #[test]
    fn test_rollover_event() {
        let field = field();
        let mut state = running(5);
        state.character.y = 200.0;
        state.pairs[2].set_horizontal_position(-120.0);

        let events = tick(&mut state, &field);
        assert!(events.contains(&GameEvent::GapRandomized { pair: 2 }));
        assert_eq!(state.pairs[2].x, 800.0 + ROLLOVER_OFFSET);
        let p = &state.pairs[2];
        assert!(p.top.body_height < 500.0 - 250.0 - MOUTH_HEIGHT);
    }

    #[test]
    fn test_reads_live_field_size() {
        let mut state = running(6);
        state.character.y = 200.0;
        state.pairs[0].set_horizontal_position(-120.0);

        let wide = PlayField::new(1200.0, 500.0);
        tick(&mut state, &wide);
        assert_eq!(state.pairs[0].x, 1200.0 + ROLLOVER_OFFSET);
    }
}
