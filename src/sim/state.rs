//! Game state and round lifecycle
//!
//! A `GameLoop` owns everything that belongs to one round: the character,
//! the score and the fixed pool of obstacle pairs.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::character::Character;
use super::obstacle::ObstaclePair;
use super::score::ScoreCounter;
use crate::PlayField;
use crate::Settings;
use crate::consts::PAIR_COUNT;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Constructed, waiting for the first press
    Idle,
    /// Ticking
    Running,
    /// A collision ended the round (terminal)
    Halted,
}

/// Notable things that happened during `start` or a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The round began
    Started,
    /// A pair received a new gap position
    GapRandomized { pair: usize },
    /// A pair passed the character
    Scored { pair: usize, score: u32 },
    /// A pair hit the character
    Collision { pair: usize },
    /// The round ended
    GameOver { score: u32 },
}

/// Complete state of one round
#[derive(Debug, Clone)]
pub struct GameLoop {
    /// Round seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub settings: Settings,
    pub phase: GamePhase,
    pub character: Character,
    pub score: ScoreCounter,
    /// Fixed pool, advanced in index order every tick
    pub pairs: Vec<ObstaclePair>,
    /// Ticks run this round
    pub time_ticks: u64,
}

impl GameLoop {
    /// Create an idle round with the given settings and seed
    pub fn new(settings: Settings, seed: u64) -> Self {
        let pairs = (0..PAIR_COUNT)
            .map(|_| ObstaclePair::new(settings.vertical_gap_size, settings.horizontal_speed))
            .collect();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings,
            phase: GamePhase::Idle,
            character: Character::new(settings.ascend_step, settings.descend_step),
            score: ScoreCounter::new(),
            pairs,
            time_ticks: 0,
        }
    }

    /// Where pair `index` is placed when a round starts
    pub fn initial_offset(&self, index: usize, field: &PlayField) -> f32 {
        field.width() + index as f32 * self.settings.horizontal_obstacle_spacing
    }

    /// Idle -> Running. Lays out the pairs past the right edge, randomizes
    /// every gap and recenters the character. The press that starts a round
    /// is still held, so the character begins ascending.
    ///
    /// Returns an empty list if the round was not idle.
    pub fn start(&mut self, field: &PlayField) -> Vec<GameEvent> {
        if self.phase != GamePhase::Idle {
            log::warn!("Ignoring start request in phase {:?}", self.phase);
            return Vec::new();
        }

        let mut events = Vec::with_capacity(self.pairs.len() + 1);
        for index in 0..self.pairs.len() {
            let x = self.initial_offset(index, field);
            let pair = &mut self.pairs[index];
            pair.set_horizontal_position(x);
            pair.randomize_gap_position(field, &mut self.rng);
            events.push(GameEvent::GapRandomized { pair: index });
        }

        self.score.reset();
        self.character.recenter(field);
        self.character.set_ascending(true);
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        events.push(GameEvent::Started);

        log::info!(
            "Round started (seed {}, field {}x{})",
            self.seed,
            field.width(),
            field.height()
        );
        events
    }

    /// Running -> Halted. Returns false if the round was not running.
    pub fn halt(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Halted;
        log::info!(
            "Round halted after {} ticks with score {}",
            self.time_ticks,
            self.score.value()
        );
        true
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
