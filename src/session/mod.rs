//! Session layer: one configured game over several attempts.
//!
//! A session owns:
//! - The configuration supplied by the host (pool bounds, countdown)
//! - The current attempt's state and engine
//! - The attempt counter, which tags timer handles
//!
//! Resetting builds a brand-new attempt instead of patching the old state,
//! so a countdown callback still running for a previous attempt can never
//! touch the new one.

mod attempt;
mod game_session;

pub use attempt::{AttemptId, TimerHandle};
pub use game_session::GameSession;
