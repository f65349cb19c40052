//! Core engine types: configuration, errors, RNG, state.
//!
//! This module contains the building blocks shared by the rules engine and
//! the session layer. Hosts configure the pool via `GameConfig` rather than
//! modifying the core.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{GameConfig, PoolBounds, MAX_POOL_SIZE};
pub use error::GameError;
pub use rng::{GameRng, RandomSource};
pub use state::{Candidates, GameState, GameStatus, NumberStatus};
