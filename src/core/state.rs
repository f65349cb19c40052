//! Game state: one immutable snapshot per step of a game attempt.
//!
//! ## GameState
//!
//! - Target sum to match (absent once the pool is exhausted)
//! - Available numbers (shrinks with every commit)
//! - Candidate selection (toggled on, not yet committed)
//! - Countdown (absent while the timer is stopped)
//!
//! Status is never stored. `status()` and `status_of()` derive it from the
//! fields above on every call.
//!
//! Uses `im` persistent data structures so every transition can return a
//! fresh snapshot with O(1) cloning.

use im::OrdSet;
use serde::Serialize;
use smallvec::SmallVec;

use super::config::PoolBounds;
use super::error::GameError;
use crate::targets::{find_subset, is_achievable};

/// Candidate selection in insertion order.
pub type Candidates = SmallVec<[i64; 8]>;

/// Overall status of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GameStatus {
    /// Numbers remain and time has not run out.
    Active,
    /// Every number has been retired.
    Won,
    /// The countdown reached zero with numbers left.
    Lost,
}

impl GameStatus {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// Display status of a single number on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum NumberStatus {
    /// Retired by an earlier commit.
    Used,
    /// Selected, and the selection does not exceed the target.
    Candidate,
    /// Selected, and the selection overshoots the target.
    Wrong,
    /// Free to select.
    Available,
}

/// Complete state of one game attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) bounds: PoolBounds,
    pub(crate) target: Option<i64>,
    pub(crate) available: OrdSet<i64>,
    pub(crate) candidates: Candidates,
    pub(crate) seconds_left: Option<u32>,
}

impl GameState {
    /// Create a state with the whole pool available and the timer stopped.
    pub(crate) fn fresh(bounds: PoolBounds, target: i64) -> Self {
        Self {
            bounds,
            target: Some(target),
            available: bounds.numbers().collect(),
            candidates: Candidates::new(),
            seconds_left: None,
        }
    }

    /// Build a state from explicit parts.
    ///
    /// `target` is dropped when `available` is empty. Otherwise it must be
    /// at most `bounds.max` and reachable from the available numbers.
    ///
    /// # Errors
    ///
    /// - `InvalidBounds`/`PoolTooLarge`/`SumOutOfRange` if `bounds` is not a valid pool
    /// - `NumberOutOfPool` if an available number lies outside `bounds`
    /// - `CandidateNotAvailable` if a candidate is not available
    /// - `DuplicateCandidate` if a candidate is listed twice
    /// - `UnreachableTarget` if no subset of `available` matches `target`
    pub fn from_parts(
        bounds: PoolBounds,
        available: impl IntoIterator<Item = i64>,
        candidates: impl IntoIterator<Item = i64>,
        target: i64,
        seconds_left: Option<u32>,
    ) -> Result<Self, GameError> {
        bounds.validate()?;

        let available: OrdSet<i64> = available.into_iter().collect();
        if let Some(&number) = available.iter().find(|&&n| !bounds.contains(n)) {
            return Err(GameError::NumberOutOfPool {
                number,
                min: bounds.min,
                max: bounds.max,
            });
        }

        let mut selected = Candidates::new();
        for number in candidates {
            if !available.contains(&number) {
                return Err(GameError::CandidateNotAvailable { number });
            }
            if selected.contains(&number) {
                return Err(GameError::DuplicateCandidate { number });
            }
            selected.push(number);
        }

        let target = if available.is_empty() {
            None
        } else {
            let pool: Vec<i64> = available.iter().copied().collect();
            if target > bounds.max || !is_achievable(&pool, target) {
                return Err(GameError::UnreachableTarget { target });
            }
            Some(target)
        };

        Ok(Self {
            bounds,
            target,
            available,
            candidates: selected,
            seconds_left,
        })
    }

    /// Pool bounds this game was created with.
    #[must_use]
    pub fn bounds(&self) -> PoolBounds {
        self.bounds
    }

    /// Sum to match, or `None` once the pool is exhausted.
    #[must_use]
    pub fn target(&self) -> Option<i64> {
        self.target
    }

    /// Numbers not yet retired, ascending.
    #[must_use]
    pub fn available(&self) -> &OrdSet<i64> {
        &self.available
    }

    /// Numbers currently selected, in selection order.
    #[must_use]
    pub fn candidates(&self) -> &[i64] {
        &self.candidates
    }

    /// Seconds remaining, or `None` while the timer is stopped.
    #[must_use]
    pub fn seconds_left(&self) -> Option<u32> {
        self.seconds_left
    }

    /// Check if the countdown is running.
    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.seconds_left.is_some()
    }

    /// Check if a number is still in play.
    #[must_use]
    pub fn is_available(&self, number: i64) -> bool {
        self.available.contains(&number)
    }

    /// Check if a number is currently selected.
    #[must_use]
    pub fn is_candidate(&self, number: i64) -> bool {
        self.candidates.contains(&number)
    }

    /// Sum of the current selection.
    #[must_use]
    pub fn candidate_sum(&self) -> i64 {
        self.candidates.iter().sum()
    }

    /// Check if the selection overshoots the target.
    #[must_use]
    pub fn candidates_are_wrong(&self) -> bool {
        self.target.is_some_and(|target| self.candidate_sum() > target)
    }

    /// Derive the overall game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.available.is_empty() {
            GameStatus::Won
        } else if self.seconds_left == Some(0) {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// Derive the display status of one number.
    #[must_use]
    pub fn status_of(&self, number: i64) -> NumberStatus {
        if !self.is_available(number) {
            NumberStatus::Used
        } else if self.is_candidate(number) {
            if self.candidates_are_wrong() {
                NumberStatus::Wrong
            } else {
                NumberStatus::Candidate
            }
        } else {
            NumberStatus::Available
        }
    }

    /// Every number on the board with its display status, ascending.
    pub fn board(&self) -> impl Iterator<Item = (i64, NumberStatus)> + '_ {
        self.bounds.numbers().map(move |n| (n, self.status_of(n)))
    }

    /// One subset of the available numbers that matches the target.
    ///
    /// Returns `None` when there is no target or it cannot be reached.
    #[must_use]
    pub fn hint(&self) -> Option<Vec<i64>> {
        let target = self.target?;
        let pool: Vec<i64> = self.available.iter().copied().collect();
        find_subset(&pool, target)
    }
}
