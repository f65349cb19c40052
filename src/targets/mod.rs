//! Target generation.
//!
//! Targets are drawn from the sums of subsets of the still-available
//! numbers, so every target is solvable when it is shown. The generator is
//! a set of pure functions; randomness comes in through `RandomSource`.

pub mod generator;

pub use generator::{admissible_sums, find_subset, is_achievable, pick_target};
