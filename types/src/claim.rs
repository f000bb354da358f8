//! Activity claim record: the evidence persisted once a claim is accepted.

use crate::activity::ActivityType;
use crate::id::{TargetId, UserId};
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// An accepted physical-presence claim, persisted by the external store.
///
/// The verified coordinates are always the freshly sampled device position,
/// never the target's; the record proves the user's device was there.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityClaim {
    pub user: UserId,
    pub target: TargetId,
    pub activity: ActivityType,
    /// Latitude of the device at claim time (degrees).
    pub verified_lat: f64,
    /// Longitude of the device at claim time (degrees).
    pub verified_lng: f64,
    /// Great-circle distance from device to target, rounded to centimeters.
    pub distance_m: f64,
    /// Reported GPS accuracy of the sample (meters).
    pub accuracy_m: f64,
    pub claimed_at: Timestamp,
}
