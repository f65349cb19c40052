//! Game configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `PoolBounds`: the inclusive range of numbers on the board
//! - `GameConfig`: bounds plus countdown length and an optional seed
//!
//! The engine never hardcodes pool bounds or countdown length.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Largest pool the engine accepts.
///
/// Target generation enumerates subsets, so the pool size is the exponent.
pub const MAX_POOL_SIZE: u64 = 20;

/// Inclusive bounds of the number pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolBounds {
    /// Smallest number on the board.
    pub min: i64,
    /// Largest number on the board; also the bound on every target.
    pub max: i64,
}

impl PoolBounds {
    /// Create pool bounds without validation.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Create pool bounds, rejecting an empty or oversized pool.
    pub fn checked(min: i64, max: i64) -> Result<Self, GameError> {
        let bounds = Self::new(min, max);
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that the pool is non-empty, small enough to enumerate, and
    /// that every subset sum fits in an `i64`.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max < self.min {
            return Err(GameError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        let size = self.size();
        if size > MAX_POOL_SIZE {
            return Err(GameError::PoolTooLarge {
                size,
                limit: MAX_POOL_SIZE,
            });
        }
        // Subset sums lie between the sum of the negatives and the sum of the positives
        let (low, high) = self.numbers().fold((0i128, 0i128), |(low, high), n| {
            let n = i128::from(n);
            (low + n.min(0), high + n.max(0))
        });
        if low < i128::from(i64::MIN) || high > i128::from(i64::MAX) {
            return Err(GameError::SumOutOfRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Number of values in the pool (0 if the bounds are inverted).
    #[must_use]
    pub fn size(&self) -> u64 {
        if self.max < self.min {
            0
        } else {
            self.max.abs_diff(self.min).saturating_add(1)
        }
    }

    /// Check if a number lies inside the bounds.
    #[must_use]
    pub fn contains(&self, number: i64) -> bool {
        (self.min..=self.max).contains(&number)
    }

    /// Iterate over every number in the pool, ascending.
    pub fn numbers(&self) -> impl Iterator<Item = i64> {
        self.min..=self.max
    }
}

impl std::fmt::Display for PoolBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Complete configuration for a game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Numbers on the board.
    pub bounds: PoolBounds,

    /// Countdown length in seconds when the timer starts.
    pub countdown_seconds: u32,

    /// Seed for target generation. `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with the given bounds and countdown.
    pub fn new(bounds: PoolBounds, countdown_seconds: u32) -> Self {
        Self {
            bounds,
            countdown_seconds,
            seed: None,
        }
    }

    /// The `1..=10` board with an eleven second countdown.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(PoolBounds::new(1, 10), 11)
    }

    /// The `-5..=6` board with a seven second countdown.
    #[must_use]
    pub fn signed() -> Self {
        Self::new(PoolBounds::new(-5, 6), 7)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the countdown length.
    #[must_use]
    pub fn with_countdown(mut self, seconds: u32) -> Self {
        self.countdown_seconds = seconds;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GameError> {
        self.bounds.validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_size() {
        assert_eq!(PoolBounds::new(1, 10).size(), 10);
        assert_eq!(PoolBounds::new(-5, 6).size(), 12);
        assert_eq!(PoolBounds::new(7, 7).size(), 1);
        assert_eq!(PoolBounds::new(3, 2).size(), 0);
    }

    #[test]
    fn test_bounds_validate() {
        assert!(PoolBounds::checked(1, 10).is_ok());
        assert_eq!(
            PoolBounds::checked(4, 3),
            Err(GameError::InvalidBounds { min: 4, max: 3 })
        );
        assert_eq!(
            PoolBounds::checked(1, 21),
            Err(GameError::PoolTooLarge { size: 21, limit: 20 })
        );
    }

    #[test]
    fn test_bounds_extremes_do_not_overflow() {
        let bounds = PoolBounds::new(i64::MIN, i64::MAX);
        assert!(matches!(bounds.validate(), Err(GameError::PoolTooLarge { .. })));
    }

    #[test]
    fn test_bounds_sum_must_fit() {
        assert_eq!(
            PoolBounds::checked(i64::MAX - 19, i64::MAX),
            Err(GameError::SumOutOfRange {
                min: i64::MAX - 19,
                max: i64::MAX
            })
        );
        assert_eq!(
            PoolBounds::checked(i64::MIN, i64::MIN + 1),
            Err(GameError::SumOutOfRange {
                min: i64::MIN,
                max: i64::MIN + 1
            })
        );

        // Twenty numbers of at most MAX / 20 still fit
        let top = i64::MAX / 20;
        assert!(PoolBounds::checked(top - 19, top).is_ok());
        assert!(PoolBounds::checked(-top, -top + 19).is_ok());
    }

    #[test]
    fn test_bounds_numbers() {
        let numbers: Vec<_> = PoolBounds::new(-2, 2).numbers().collect();
        assert_eq!(numbers, vec![-2, -1, 0, 1, 2]);
        assert!(PoolBounds::new(-2, 2).contains(0));
        assert!(!PoolBounds::new(-2, 2).contains(3));
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::classic().with_seed(7).with_countdown(20);
        assert_eq!(config.bounds, PoolBounds::new(1, 10));
        assert_eq!(config.countdown_seconds, 20);
        assert_eq!(config.seed, Some(7));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let json = r#"{"bounds":{"min":-5,"max":6},"countdown_seconds":7}"#;
        let config: GameConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config, GameConfig::signed());
        assert_eq!(config.seed, None);
    }
}
