//! Safety-report severity escalation.
//!
//! Safety reports have no duplicate window: repeats at the same spot are a
//! signal, not farming. The caller clusters reports within
//! [`DEFAULT_CLUSTER_RADIUS_M`] of a pin and escalates severity with the
//! repeat count.

use serde::{Deserialize, Serialize};
use shore_types::{ActivityClaim, GeoPoint};

/// Pin-clustering radius for counting nearby prior reports.
pub const DEFAULT_CLUSTER_RADIUS_M: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Severity of a new report given how many prior reports cluster around it.
pub fn safety_severity(prior_reports_nearby: usize) -> Severity {
    match prior_reports_nearby {
        0 => Severity::Low,
        1 | 2 => Severity::Medium,
        _ => Severity::High,
    }
}

/// Count prior reports whose verified position lies within `radius_m` of a
/// new pin.
pub fn nearby_reports(reports: &[ActivityClaim], pin: &GeoPoint, radius_m: f64) -> usize {
    reports
        .iter()
        .filter(|r| {
            shore_geo::distance_m(&GeoPoint::new(r.verified_lat, r.verified_lng), pin) <= radius_m
        })
        .count()
}
