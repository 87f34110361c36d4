//! Pipe Glider entry point
//!
//! Runs a headless round on a fixed-size field. An autopilot holds and
//! releases the ascend input to steer toward the next gap, and a logging
//! surface reports score changes and the game-over banner.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pipe_glider::consts::{CHARACTER_HALF_WIDTH, CHARACTER_HEIGHT, MAX_OBSTACLE_WIDTH, TICK_INTERVAL};
use pipe_glider::platform::{FixedField, InputEvent, InputQueue, RenderingSurface};
use pipe_glider::sim::{GameLoop, GamePhase};
use pipe_glider::{GameSession, PlayField, Settings, SettingsError};

/// Environment variable holding optional settings JSON
const SETTINGS_ENV: &str = "PIPE_GLIDER_SETTINGS";
/// Stop the demo after this many ticks (one minute of play)
const MAX_DEMO_TICKS: u64 = 12_000;

/// Surface that only reports through the log
#[derive(Debug, Default)]
struct LogSurface {
    score: u32,
}

impl RenderingSurface for LogSurface {
    fn set_character_position(&mut self, y: f32) {
        log::trace!("character y={:.1}", y);
    }

    fn set_pair_position(&mut self, pair: usize, x: f32) {
        log::trace!("pair {} x={:.1}", pair, x);
    }

    fn set_obstacle_heights(&mut self, pair: usize, top: f32, bottom: f32) {
        log::debug!("pair {} bodies top={:.1} bottom={:.1}", pair, top, bottom);
    }

    fn set_score(&mut self, score: u32) {
        if score != self.score {
            log::info!("Score: {}", score);
        }
        self.score = score;
    }

    fn show_start_prompt(&mut self) {
        log::info!("Hold ascend to start flying");
    }

    fn show_game_over(&mut self, score: u32) {
        log::info!("Game Over! Final score: {}", score);
    }
}

/// Steers toward the middle of the nearest gap that is still ahead
#[derive(Debug, Default)]
struct Autopilot {
    holding: bool,
}

impl Autopilot {
    fn steer(&mut self, round: &GameLoop, field: &PlayField, input: &mut InputQueue) {
        let character_left = field.center_x() - CHARACTER_HALF_WIDTH;
        let next = round
            .pairs
            .iter()
            .filter(|p| p.x + MAX_OBSTACLE_WIDTH >= character_left)
            .min_by(|a, b| a.x.total_cmp(&b.x));

        let target = match next {
            Some(pair) => {
                let gap_top = pair.top.extent();
                let gap_bottom = field.height() - pair.bottom.extent();
                (gap_top + gap_bottom) / 2.0 - CHARACTER_HEIGHT / 2.0
            }
            None => field.height() / 2.0,
        };

        let want = round.character.y > target;
        if want != self.holding {
            self.holding = want;
            input.push(if want {
                InputEvent::AscendPressed
            } else {
                InputEvent::AscendReleased
            });
        }
    }
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // Only fails if a logger is already installed
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn load_settings() -> Result<Settings, SettingsError> {
    match std::env::var(SETTINGS_ENV) {
        Ok(json) => {
            let settings = Settings::from_json(&json)?;
            log::info!("Loaded settings from {}", SETTINGS_ENV);
            Ok(settings)
        }
        Err(_) => Ok(Settings::default()),
    }
}

fn main() -> Result<(), SettingsError> {
    init_logging();
    log::info!("Pipe Glider starting...");

    let settings = load_settings()?;
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let field = FixedField::new(800.0, 500.0);
    let play_field = PlayField::from_provider(&field);
    let mut surface = LogSurface::default();
    let mut session = GameSession::new(settings, seed)?;
    let mut input = InputQueue::new();
    let mut autopilot = Autopilot::default();

    log::info!("Session initialized with seed: {}", seed);
    surface.show_start_prompt();

    // Any press starts the round
    input.push(InputEvent::AscendPressed);
    autopilot.holding = true;
    session.pump_input(&mut input, &field, &mut surface);

    let mut last = Instant::now();
    while session.phase() == GamePhase::Running && session.round().time_ticks < MAX_DEMO_TICKS {
        std::thread::sleep(TICK_INTERVAL);
        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        autopilot.steer(session.round(), &play_field, &mut input);
        session.pump_input(&mut input, &field, &mut surface);
        session.update(elapsed, &field, &mut surface);
    }

    if session.phase() == GamePhase::Running {
        session.halt();
        log::info!("Demo time limit reached with score {}", session.score());
    }
    Ok(())
}
