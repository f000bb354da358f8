//! Verification parameters: the per-activity threshold and cooldown table.
//!
//! Every deployment-tunable value for location verification lives here. The
//! defaults are the product's shipped policy; operators can retune them from
//! a TOML file without code changes.

use crate::activity::ActivityType;
use crate::claim::ActivityClaim;
use crate::error::ParamsError;
use crate::id::TargetId;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Proximity limit for an activity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceLimit {
    /// A fixed threshold in meters.
    Fixed(f64),
    /// The limit comes from the target (`TargetLocation::radius_m`); used by
    /// activities whose radius is a product decision at the call site, like
    /// the safety-report pin-clustering radius.
    CallerSupplied,
}

/// Duplicate-claim suppression window for an activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateWindow {
    /// Never blocks. Activities with this window gate repeats elsewhere
    /// (cleanup's minimum-duration rule, safety-report severity escalation).
    None,
    /// One claim per target per user per UTC calendar day.
    SameTargetUtcDay,
    /// One claim per user per rolling window, regardless of target.
    RollingAnyTarget { secs: u64 },
}

impl DuplicateWindow {
    /// Whether `prior` blocks a new claim against `target` at time `at`.
    ///
    /// A rolling-window claim exactly `secs` old no longer blocks.
    pub fn blocks(&self, prior: &ActivityClaim, target: &TargetId, at: Timestamp) -> bool {
        match self {
            DuplicateWindow::None => false,
            DuplicateWindow::SameTargetUtcDay => {
                prior.target == *target && prior.claimed_at.same_utc_day(at)
            }
            DuplicateWindow::RollingAnyTarget { secs } => {
                prior.claimed_at.elapsed_since(at) < *secs
            }
        }
    }

    /// When a window blocked by `prior` stops blocking.
    pub fn resets_at(&self, prior: &ActivityClaim, at: Timestamp) -> Timestamp {
        match self {
            DuplicateWindow::None => at,
            DuplicateWindow::SameTargetUtcDay => prior.claimed_at.next_utc_day_start(),
            DuplicateWindow::RollingAnyTarget { secs } => prior.claimed_at.plus_secs(*secs),
        }
    }
}

/// The verification rule for one activity type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityRule {
    pub distance: DistanceLimit,
    /// Ceiling on the sample's reported accuracy (meters). Readings noisier
    /// than this are untrustworthy for the activity.
    pub max_accuracy_m: f64,
    pub window: DuplicateWindow,
}

/// The full per-activity rule table.
///
/// An activity with no entry is unknown to the verifier; lookups return
/// `None` and `verify` fails with a programming error, which is how the
/// table stays open to future activity keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyParams {
    pub rules: HashMap<ActivityType, ActivityRule>,
}

impl VerifyParams {
    /// The shipped coastal-cleanup policy.
    ///
    /// Dispose is the tightest (10 m / 10 m): it gates the most farmable
    /// reward. Safety reports are the loosest (30 m accuracy, caller radius).
    pub fn coastal_defaults() -> Self {
        let mut rules = HashMap::new();
        rules.insert(
            ActivityType::BinReport,
            ActivityRule {
                distance: DistanceLimit::Fixed(10.0),
                max_accuracy_m: 15.0,
                window: DuplicateWindow::SameTargetUtcDay,
            },
        );
        rules.insert(
            ActivityType::Dispose,
            ActivityRule {
                distance: DistanceLimit::Fixed(10.0),
                max_accuracy_m: 10.0,
                window: DuplicateWindow::RollingAnyTarget { secs: 600 },
            },
        );
        rules.insert(
            ActivityType::Cleanup,
            ActivityRule {
                distance: DistanceLimit::CallerSupplied,
                max_accuracy_m: 20.0,
                window: DuplicateWindow::None,
            },
        );
        rules.insert(
            ActivityType::SafetyReport,
            ActivityRule {
                distance: DistanceLimit::CallerSupplied,
                max_accuracy_m: 30.0,
                window: DuplicateWindow::None,
            },
        );
        Self { rules }
    }

    /// Look up the rule for an activity, if one is configured.
    pub fn rule(&self, activity: ActivityType) -> Option<&ActivityRule> {
        self.rules.get(&activity)
    }

    /// Parse a rule table from TOML, rejecting non-positive thresholds.
    pub fn from_toml_str(raw: &str) -> Result<Self, ParamsError> {
        let params: VerifyParams = toml::from_str(raw)?;
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<(), ParamsError> {
        for (activity, rule) in &self.rules {
            if let DistanceLimit::Fixed(m) = rule.distance {
                if !m.is_finite() || m <= 0.0 {
                    return Err(ParamsError::InvalidDistance(*activity));
                }
            }
            if !rule.max_accuracy_m.is_finite() || rule.max_accuracy_m <= 0.0 {
                return Err(ParamsError::InvalidAccuracy(*activity));
            }
        }
        Ok(())
    }
}

/// Default is the shipped coastal policy.
impl Default for VerifyParams {
    fn default() -> Self {
        Self::coastal_defaults()
    }
}
