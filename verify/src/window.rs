//! Duplicate-suppression scan over a user's prior claims.

use shore_types::{ActivityClaim, DuplicateWindow, TargetId, Timestamp};

/// Find the prior claim that blocks a new claim at `at`, if any.
///
/// When several prior claims block, the most recent one wins so the reported
/// reset time is the latest.
pub(crate) fn find_blocking<'a>(
    window: &DuplicateWindow,
    target: &TargetId,
    at: Timestamp,
    prior_claims: &'a [ActivityClaim],
) -> Option<(&'a ActivityClaim, Timestamp)> {
    prior_claims
        .iter()
        .filter(|prior| window.blocks(prior, target, at))
        .max_by_key(|prior| prior.claimed_at)
        .map(|prior| (prior, window.resets_at(prior, at)))
}
