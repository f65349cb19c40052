//! # star-match
//!
//! Game-state engine for a star-matching arithmetic puzzle.
//!
//! A target ("stars") is shown and the player selects numbers from a fixed
//! pool whose sum equals it. A matching selection retires those numbers and
//! a new target is drawn from what remains. The game is won when the pool is
//! empty and lost when the countdown runs out first.
//!
//! ## Design Principles
//!
//! 1. **Derived Status**: Game and number status are computed from the
//!    state on every read, never stored alongside it.
//!
//! 2. **Always Solvable**: Targets are drawn from subset sums of the
//!    still-available numbers.
//!
//! 3. **Reactive**: The engine schedules nothing. Hosts drive the countdown
//!    and render the state; rendering, audio and input are theirs.
//!
//! 4. **Injected Randomness**: Target generation runs against the
//!    `RandomSource` trait, so tests can pin every draw.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG, state and status types
//! - `targets`: Subset-sum enumeration and target selection
//! - `rules`: The `GameEngine` transition rules
//! - `session`: Attempts, resets and timer handles
//!
//! ## Example
//!
//! ```
//! use star_match::{GameConfig, GameSession, GameStatus};
//!
//! let mut session = GameSession::new(GameConfig::classic().with_seed(7)).unwrap();
//! let timer = session.start().unwrap();
//!
//! // Play the hint until the pool is empty
//! while let Some(hint) = session.state().hint() {
//!     for number in hint {
//!         session.toggle(number);
//!     }
//! }
//! assert_eq!(session.status(), GameStatus::Won);
//!
//! // The finished game ignores its timer
//! assert!(!session.tick(timer));
//! ```

pub mod core;
pub mod rules;
pub mod session;
pub mod targets;

// Re-export commonly used types
pub use crate::core::{
    Candidates, GameConfig, GameError, GameRng, GameState, GameStatus, NumberStatus, PoolBounds,
    RandomSource, MAX_POOL_SIZE,
};

pub use crate::rules::GameEngine;

pub use crate::session::{AttemptId, GameSession, TimerHandle};

pub use crate::targets::{admissible_sums, find_subset, is_achievable, pick_target};
