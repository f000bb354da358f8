//! Cleanup sessions: the duplicate gate for cleanups is elapsed time, not
//! a verifier window.

use serde::{Deserialize, Serialize};
use shore_types::Timestamp;

/// Minimum cleaning time before a cleanup claim may be submitted.
pub const DEFAULT_MIN_CLEANUP_SECS: u64 = 600;

/// A running beach-cleaning session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanupSession {
    pub started_at: Timestamp,
    pub min_duration_secs: u64,
}

impl CleanupSession {
    pub fn start(started_at: Timestamp) -> Self {
        Self {
            started_at,
            min_duration_secs: DEFAULT_MIN_CLEANUP_SECS,
        }
    }

    pub fn with_min_duration(started_at: Timestamp, min_duration_secs: u64) -> Self {
        Self {
            started_at,
            min_duration_secs,
        }
    }

    /// Whether enough cleaning time has elapsed to submit the claim.
    pub fn meets_minimum(&self, now: Timestamp) -> bool {
        self.started_at.has_expired(self.min_duration_secs, now)
    }

    /// Seconds still to go before the session qualifies.
    pub fn remaining_secs(&self, now: Timestamp) -> u64 {
        self.min_duration_secs
            .saturating_sub(self.started_at.elapsed_since(now))
    }
}
