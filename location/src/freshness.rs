//! Sample-freshness policy.
//!
//! The caller owns this policy and passes it explicitly wherever a cached
//! sample might be reused; there is no module-level location cache. Tourist
//! accounts re-verify within a validity window; staff roles keep access
//! without re-sampling.

use shore_types::{GpsSample, Timestamp};

/// Whether a previously acquired sample may still be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreshnessPolicy {
    /// When false, any cached sample is acceptable regardless of age.
    pub requires_fresh_sample: bool,
    /// Maximum acceptable sample age in seconds when freshness is required.
    pub validity_window_secs: u64,
}

impl FreshnessPolicy {
    /// Require a sample no older than `validity_window_secs`.
    pub fn fresh_within(validity_window_secs: u64) -> Self {
        Self {
            requires_fresh_sample: true,
            validity_window_secs,
        }
    }

    /// Accept any cached sample (roles with permanent location access).
    pub fn always_valid() -> Self {
        Self {
            requires_fresh_sample: false,
            validity_window_secs: 0,
        }
    }

    /// The shipped tourist policy: samples are good for 12 hours.
    pub fn tourist_default() -> Self {
        Self::fresh_within(12 * 3600)
    }

    /// Whether `sample` is still acceptable at `now`.
    pub fn is_acceptable(&self, sample: &GpsSample, now: Timestamp) -> bool {
        if !self.requires_fresh_sample {
            return true;
        }
        !sample
            .captured_at
            .has_expired(self.validity_window_secs, now)
    }
}
