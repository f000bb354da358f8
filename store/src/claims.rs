//! Storage trait seams for activity claims.

use crate::StoreError;
use shore_types::{ActivityClaim, ActivityType, TargetId, UserId};

/// Read side: the prior claims a caller feeds into verification.
pub trait ClaimStore: Send + Sync {
    /// All claims by `user` for `activity`, optionally narrowed to one
    /// target (the same-target-per-day window only needs that target's
    /// claims; rolling windows need them all).
    fn query_claims(
        &self,
        user: &UserId,
        activity: ActivityType,
        target: Option<&TargetId>,
    ) -> Result<Vec<ActivityClaim>, StoreError>;
}

/// Write side: persist an accepted claim and credit its reward.
///
/// Implementations MUST make the duplicate check, the claim insert, and the
/// coin credit one atomic operation: a compare-and-insert keyed on
/// (user, target, activity, duplicate window). Losing the race returns
/// [`StoreError::Duplicate`]; partial writes are not allowed.
pub trait ClaimRecorder: Send + Sync {
    fn record_claim_and_reward(
        &self,
        claim: &ActivityClaim,
        reward_coins: u64,
    ) -> Result<(), StoreError>;
}
