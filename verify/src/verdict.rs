//! Verification verdicts: expected outcomes, returned rather than thrown.

use serde::{Deserialize, Serialize};
use shore_types::Timestamp;

/// The verifier's decision on a physical-presence claim.
///
/// Rejections carry the required-versus-actual numbers so callers can render
/// precise guidance ("move closer, you are 43 m away, need ≤ 10 m") without
/// parsing message strings. The serialized form is tagged with a stable
/// `kind` field for the same reason.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// The claim is trustworthy. The coordinates are the freshly sampled
    /// device position, never the target's.
    Accepted {
        verified_lat: f64,
        verified_lng: f64,
        distance_m: f64,
        accuracy_m: f64,
    },
    /// The device is outside the activity's proximity threshold.
    TooFar { distance_m: f64, required_m: f64 },
    /// The reading is too noisy to trust for this activity.
    AccuracyTooLow { accuracy_m: f64, required_m: f64 },
    /// An earlier accepted claim still occupies the suppression window.
    DuplicateClaim {
        prior_claim_at: Timestamp,
        window_resets_at: Timestamp,
    },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }
}
