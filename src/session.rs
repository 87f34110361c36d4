//! Round orchestration
//!
//! A `GameSession` owns the round in flight, routes input events to it,
//! runs ticks at a fixed interval and mirrors the simulation onto a
//! rendering surface.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{MAX_SUBSTEPS, TICK_INTERVAL};
use crate::platform::{GeometryProvider, InputEvent, InputSource, RenderingSurface};
use crate::sim::{GameEvent, GameLoop, GamePhase, tick};
use crate::{PlayField, Settings, SettingsError};

pub struct GameSession {
    settings: Settings,
    /// Source of per-round seeds
    seeds: Pcg32,
    round: GameLoop,
    accumulator: Duration,
    rounds_started: u32,
}

impl GameSession {
    /// Create a session waiting for its first round to start
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut seeds = Pcg32::seed_from_u64(seed);
        let round = GameLoop::new(settings, seeds.random());
        Ok(Self {
            settings,
            seeds,
            round,
            accumulator: Duration::ZERO,
            rounds_started: 0,
        })
    }

    pub fn round(&self) -> &GameLoop {
        &self.round
    }

    pub fn phase(&self) -> GamePhase {
        self.round.phase
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn score(&self) -> u32 {
        self.round.score.value()
    }

    /// Rounds started since the session was created
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    /// Start the idle round. Returns false if it was not idle.
    pub fn start<G, S>(&mut self, geometry: &G, surface: &mut S) -> bool
    where
        G: GeometryProvider + ?Sized,
        S: RenderingSurface + ?Sized,
    {
        let field = PlayField::from_provider(geometry);
        let events = self.round.start(&field);
        if events.is_empty() {
            return false;
        }
        self.accumulator = Duration::ZERO;
        self.rounds_started += 1;
        self.sync_surface(surface);
        self.apply_events(&events, surface);
        true
    }

    /// Stop the round in flight. Pending tick time is dropped.
    pub fn halt(&mut self) -> bool {
        self.accumulator = Duration::ZERO;
        self.round.halt()
    }

    /// Abandon the current round and build a fresh idle one
    pub fn restart<S>(&mut self, surface: &mut S)
    where
        S: RenderingSurface + ?Sized,
    {
        self.halt();
        self.round = GameLoop::new(self.settings, self.seeds.random());
        log::info!("Session restarted, waiting for input");
        surface.show_start_prompt();
    }

    /// Route one input event to the round
    pub fn handle_input<G, S>(&mut self, event: InputEvent, geometry: &G, surface: &mut S)
    where
        G: GeometryProvider + ?Sized,
        S: RenderingSurface + ?Sized,
    {
        match (event, self.round.phase) {
            (InputEvent::Restart, _) => self.restart(surface),
            (InputEvent::AscendPressed, GamePhase::Idle) => {
                self.start(geometry, surface);
            }
            (InputEvent::AscendPressed, GamePhase::Running) => {
                self.round.character.set_ascending(true);
            }
            (InputEvent::AscendReleased, GamePhase::Running) => {
                self.round.character.set_ascending(false);
            }
            (_, GamePhase::Idle | GamePhase::Halted) => {}
        }
    }

    /// Drain every pending event from `input`
    pub fn pump_input<I, G, S>(&mut self, input: &mut I, geometry: &G, surface: &mut S)
    where
        I: InputSource + ?Sized,
        G: GeometryProvider + ?Sized,
        S: RenderingSurface + ?Sized,
    {
        while let Some(event) = input.poll() {
            self.handle_input(event, geometry, surface);
        }
    }

    /// Account for `elapsed` wall time and run the ticks that fit into it.
    /// Returns the number of ticks run.
    pub fn update<G, S>(&mut self, elapsed: Duration, geometry: &G, surface: &mut S) -> u32
    where
        G: GeometryProvider + ?Sized,
        S: RenderingSurface + ?Sized,
    {
        if !self.round.is_running() {
            self.accumulator = Duration::ZERO;
            return 0;
        }

        self.accumulator += elapsed.min(TICK_INTERVAL * MAX_SUBSTEPS);

        let mut substeps = 0;
        while self.accumulator >= TICK_INTERVAL && substeps < MAX_SUBSTEPS {
            self.accumulator -= TICK_INTERVAL;
            substeps += 1;
            self.step(geometry, surface);
            if !self.round.is_running() {
                self.accumulator = Duration::ZERO;
                break;
            }
        }
        substeps
    }

    /// Run exactly one tick
    pub fn step<G, S>(&mut self, geometry: &G, surface: &mut S) -> Vec<GameEvent>
    where
        G: GeometryProvider + ?Sized,
        S: RenderingSurface + ?Sized,
    {
        let field = PlayField::from_provider(geometry);
        let ran = self.round.is_running();
        let events = tick(&mut self.round, &field);
        if ran {
            surface.set_character_position(self.round.character.y);
            for (index, pair) in self.round.pairs.iter().enumerate() {
                surface.set_pair_position(index, pair.x);
            }
        }
        self.apply_events(&events, surface);
        events
    }

    /// Write every entity's current state to the surface
    pub fn sync_surface<S>(&self, surface: &mut S)
    where
        S: RenderingSurface + ?Sized,
    {
        surface.set_character_position(self.round.character.y);
        for (index, pair) in self.round.pairs.iter().enumerate() {
            surface.set_pair_position(index, pair.x);
            surface.set_obstacle_heights(index, pair.top.body_height, pair.bottom.body_height);
        }
        surface.set_score(self.round.score.value());
    }

    fn apply_events<S>(&self, events: &[GameEvent], surface: &mut S)
    where
        S: RenderingSurface + ?Sized,
    {
        for event in events {
            match *event {
                GameEvent::GapRandomized { pair } => {
                    let p = &self.round.pairs[pair];
                    surface.set_obstacle_heights(pair, p.top.body_height, p.bottom.body_height);
                }
                GameEvent::Scored { score, .. } => surface.set_score(score),
                GameEvent::GameOver { score } => surface.show_game_over(score),
                GameEvent::Started | GameEvent::Collision { .. } => {}
            }
        }
    }
}
