//! Attempt identity and timer handles.

use serde::{Deserialize, Serialize};

/// Identifier of one game attempt inside a session.
///
/// Attempts are numbered from 1 and increase on every reset. The counter
/// saturates at `u64::MAX` instead of wrapping back to an earlier id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AttemptId(pub u64);

impl AttemptId {
    /// The first attempt of a session.
    pub const FIRST: AttemptId = AttemptId(1);

    /// Get the raw attempt number.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The attempt after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Attempt {}", self.0)
    }
}

/// Token tying countdown ticks to the attempt that started the timer.
///
/// The host's timer callback passes it back with every tick. Once the
/// session moves to a new attempt, ticks carrying an older handle are
/// ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle {
    attempt: AttemptId,
}

impl TimerHandle {
    pub(crate) const fn new(attempt: AttemptId) -> Self {
        Self { attempt }
    }

    /// Attempt this handle belongs to.
    #[must_use]
    pub const fn attempt(self) -> AttemptId {
        self.attempt
    }
}
