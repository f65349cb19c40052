//! Game session implementation.

use log::{debug, info};

use super::attempt::{AttemptId, TimerHandle};
use crate::core::{GameConfig, GameError, GameRng, GameState, GameStatus, NumberStatus};
use crate::rules::GameEngine;

/// A configured game played over one or more attempts.
///
/// Each attempt gets its own engine, forked from the session RNG, so a
/// seeded session replays the same targets attempt by attempt no matter
/// how earlier attempts went.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    rng: GameRng,
    engine: GameEngine,
    state: GameState,
    attempt: AttemptId,
}

impl GameSession {
    /// Create a session and its first attempt.
    ///
    /// The timer is stopped until `start()` is called.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` describes an invalid pool.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut engine = GameEngine::new(rng.fork());
        let state = engine.new_game(config.bounds.min, config.bounds.max)?;
        info!("session started, seed {}", rng.seed());

        Ok(Self {
            config,
            rng,
            engine,
            state,
            attempt: AttemptId::FIRST,
        })
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current attempt.
    #[must_use]
    pub fn attempt(&self) -> AttemptId {
        self.attempt
    }

    /// Derived status of the current attempt.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Derived display status of one number.
    #[must_use]
    pub fn status_of(&self, number: i64) -> NumberStatus {
        self.state.status_of(number)
    }

    /// Start the countdown at the configured length.
    ///
    /// Returns the handle the host's timer must pass to `tick`, or `None`
    /// if the attempt is already over.
    pub fn start(&mut self) -> Option<TimerHandle> {
        if self.status() != GameStatus::Active {
            return None;
        }
        self.state = self
            .engine
            .start_timer(&self.state, Some(self.config.countdown_seconds));
        Some(TimerHandle::new(self.attempt))
    }

    /// Stop the countdown. Existing handles stay valid for a later `start`.
    pub fn pause(&mut self) {
        self.state = self.engine.start_timer(&self.state, None);
    }

    /// Toggle a number and return the resulting game status.
    pub fn toggle(&mut self, number: i64) -> GameStatus {
        self.state = self.engine.toggle_number(&self.state, number);
        self.status()
    }

    /// Advance the countdown for the attempt `handle` was issued to.
    ///
    /// Returns `true` if a second was taken off the clock. Ticks from an
    /// earlier attempt, a stopped timer, or a finished game change nothing.
    pub fn tick(&mut self, handle: TimerHandle) -> bool {
        if handle.attempt() != self.attempt {
            debug!("tick from {} ignored, current is {}", handle.attempt(), self.attempt);
            return false;
        }

        let next = self.engine.tick(&self.state);
        let applied = next.seconds_left() != self.state.seconds_left();
        self.state = next;
        applied
    }

    /// Throw away the current attempt and start a fresh one.
    ///
    /// Handles issued to earlier attempts are orphaned. The new attempt's
    /// timer is stopped.
    ///
    /// # Errors
    ///
    /// Propagates game creation errors; the current attempt is kept if
    /// creation fails.
    pub fn reset_for_new_attempt(&mut self) -> Result<AttemptId, GameError> {
        let mut engine = GameEngine::new(self.rng.fork());
        let state = engine.new_game(self.config.bounds.min, self.config.bounds.max)?;

        self.engine = engine;
        self.state = state;
        self.attempt = self.attempt.next();
        info!("{} started", self.attempt);
        Ok(self.attempt)
    }
}
