//! GPS sample type: a single location reading from a device.

use crate::geo::GeoPoint;
use crate::time::Timestamp;
use serde::{Deserialize, Serialize};

/// A single location reading produced by a device's location provider.
///
/// Immutable once created; consumed once by a verification call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GpsSample {
    /// Where the device reports it is.
    pub point: GeoPoint,
    /// Radius (meters) of the circle the true position lies in with ~68%
    /// confidence, as reported by the device's location API.
    pub accuracy_m: f64,
    /// When the reading was taken.
    pub captured_at: Timestamp,
}

impl GpsSample {
    pub fn new(point: GeoPoint, accuracy_m: f64, captured_at: Timestamp) -> Self {
        Self {
            point,
            accuracy_m,
            captured_at,
        }
    }

    /// A sample is valid when its coordinates are in range and its accuracy
    /// is a finite non-negative number.
    pub fn is_valid(&self) -> bool {
        self.point.is_valid() && self.accuracy_m.is_finite() && self.accuracy_m >= 0.0
    }

    /// Age of this sample in seconds relative to `now`.
    pub fn age_secs(&self, now: Timestamp) -> u64 {
        self.captured_at.elapsed_since(now)
    }
}
