//! Engine error type.
//!
//! Only construction can fail. Player input that makes no sense in the
//! current state (toggling a used number, ticking a stopped timer) is a
//! no-op, never an error.

use thiserror::Error;

/// Errors raised when a game cannot be built or a snapshot is inconsistent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `max` is below `min`, so the pool would be empty.
    #[error("invalid pool bounds (min {min} > max {max})")]
    InvalidBounds { min: i64, max: i64 },

    /// The pool has too many numbers for subset enumeration.
    #[error("pool of {size} numbers exceeds the limit of {limit}")]
    PoolTooLarge { size: u64, limit: u64 },

    /// Some subset of the pool sums past the `i64` range.
    #[error("subset sums of the pool {min}..={max} overflow i64")]
    SumOutOfRange { min: i64, max: i64 },

    /// No non-empty subset of the pool sums to at most `bound`.
    #[error("no admissible target in a pool of {pool_size} numbers bounded by {bound}")]
    Unsolvable { pool_size: usize, bound: i64 },

    /// The target cannot be matched by any subset of the available numbers.
    #[error("target {target} is not reachable from the available numbers")]
    UnreachableTarget { target: i64 },

    /// A number lies outside the pool bounds.
    #[error("number {number} is outside the pool {min}..={max}")]
    NumberOutOfPool { number: i64, min: i64, max: i64 },

    /// A candidate is not among the available numbers.
    #[error("candidate {number} is not available")]
    CandidateNotAvailable { number: i64 },

    /// A candidate appears more than once.
    #[error("candidate {number} is selected twice")]
    DuplicateCandidate { number: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidBounds { min: 5, max: 1 };
        assert_eq!(err.to_string(), "invalid pool bounds (min 5 > max 1)");

        let err = GameError::Unsolvable { pool_size: 0, bound: 10 };
        assert_eq!(
            err.to_string(),
            "no admissible target in a pool of 0 numbers bounded by 10"
        );

        let err = GameError::UnreachableTarget { target: 9 };
        assert_eq!(
            err.to_string(),
            "target 9 is not reachable from the available numbers"
        );
    }
}
