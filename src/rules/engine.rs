//! Transition rules for the star-matching puzzle.
//!
//! Every operation takes the current snapshot and returns the next one.
//! Input that makes no sense in the current state returns an unchanged
//! clone, so hosts never need to guard their calls.

use log::{debug, info, trace};

use crate::core::{
    GameError, GameRng, GameState, GameStatus, NumberStatus, PoolBounds, RandomSource,
};
use crate::targets::pick_target;

/// Rules engine.
///
/// Owns the random source used to draw targets. `tick` and `start_timer`
/// never touch it, so only game creation and commits advance the stream.
///
/// ## State Machine
///
/// `Active` moves to `Won` when the pool empties and to `Lost` when the
/// countdown reaches zero. Both are terminal: no operation leaves them.
#[derive(Clone, Debug)]
pub struct GameEngine<R: RandomSource = GameRng> {
    rng: R,
}

impl<R: RandomSource> GameEngine<R> {
    /// Create an engine drawing targets from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Start a game over the pool `min..=max`.
    ///
    /// All numbers are available, nothing is selected, and the timer is
    /// stopped. The first target is drawn from the subset sums of the whole
    /// pool, bounded by `max`.
    ///
    /// # Errors
    ///
    /// - `InvalidBounds` if `max < min`
    /// - `PoolTooLarge` if the pool is too large to enumerate
    pub fn new_game(&mut self, min: i64, max: i64) -> Result<GameState, GameError> {
        let bounds = PoolBounds::checked(min, max)?;
        let pool: Vec<i64> = bounds.numbers().collect();
        let target = pick_target(&pool, bounds.max, &mut self.rng)?;

        info!("new game on {}, target {}", bounds, target);
        Ok(GameState::fresh(bounds, target))
    }

    /// Set the countdown. `None` stops the timer.
    ///
    /// Ignored once the game is over, so a finished game cannot be revived.
    #[must_use]
    pub fn start_timer(&self, state: &GameState, seconds: Option<u32>) -> GameState {
        if state.status() != GameStatus::Active {
            trace!("timer change ignored, game is {:?}", state.status());
            return state.clone();
        }

        let mut next = state.clone();
        next.seconds_left = seconds;
        match seconds {
            Some(s) => debug!("timer set to {}s", s),
            None => debug!("timer stopped"),
        }
        next
    }

    /// Advance the countdown by one second.
    ///
    /// Only applies while the game is active and the timer is running with
    /// time left. Reaching zero loses the game.
    #[must_use]
    pub fn tick(&self, state: &GameState) -> GameState {
        let seconds = match (state.status(), state.seconds_left) {
            (GameStatus::Active, Some(s)) if s > 0 => s,
            _ => {
                trace!("tick ignored");
                return state.clone();
            }
        };

        let mut next = state.clone();
        next.seconds_left = Some(seconds - 1);
        trace!("tick, {}s left", seconds - 1);

        if next.status() == GameStatus::Lost {
            info!("time ran out with {} numbers left", next.available.len());
        }
        next
    }

    /// Select or deselect a number.
    ///
    /// An unselected number is appended to the selection; a selected one is
    /// removed. When the selection is non-empty and its sum equals the
    /// target, it is committed: the selected numbers are retired and a new
    /// target is drawn from what remains. Retiring the last numbers wins
    /// the game.
    ///
    /// Ignored when the game is over or the number is not available.
    #[must_use]
    pub fn toggle_number(&mut self, state: &GameState, number: i64) -> GameState {
        if state.status() != GameStatus::Active || !state.is_available(number) {
            trace!("toggle of {} ignored", number);
            return state.clone();
        }

        let mut next = state.clone();
        if let Some(pos) = next.candidates.iter().position(|&c| c == number) {
            next.candidates.remove(pos);
            debug!("deselected {}", number);
        } else {
            next.candidates.push(number);
            debug!("selected {}", number);
        }

        if next.candidates.is_empty() || next.target != Some(next.candidate_sum()) {
            return next;
        }
        self.commit(next)
    }

    /// Derive the display status of one number.
    #[must_use]
    pub fn status_of(&self, state: &GameState, number: i64) -> NumberStatus {
        state.status_of(number)
    }

    /// Retire the selection and draw the next target.
    fn commit(&mut self, mut state: GameState) -> GameState {
        let retired = std::mem::take(&mut state.candidates);
        for number in &retired {
            state.available.remove(number);
        }

        if state.available.is_empty() {
            state.target = None;
            info!("committed {:?}, pool exhausted, game won", retired.as_slice());
            return state;
        }

        let pool: Vec<i64> = state.available.iter().copied().collect();
        // Every remaining number is at most the bound, so singletons always qualify
        let target = pick_target(&pool, state.bounds.max, &mut self.rng)
            .unwrap_or_else(|err| panic!("no target for a non-empty pool: {err}"));
        state.target = Some(target);

        info!(
            "committed {:?}, {} numbers left, next target {:?}",
            retired.as_slice(),
            state.available.len(),
            state.target
        );
        state
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}
