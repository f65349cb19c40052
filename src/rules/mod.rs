//! Transition rules for the puzzle.
//!
//! `GameEngine` defines:
//! - How a game starts and which target it shows
//! - How toggling a number changes the selection and when it commits
//! - How the countdown advances and when the game is lost
//!
//! Status is derived from the state, so there is no separate win or loss
//! transition.

pub mod engine;

pub use engine::GameEngine;
