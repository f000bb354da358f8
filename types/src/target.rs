//! Target location: where a claimed activity is supposed to take place.

use crate::geo::GeoPoint;
use crate::id::TargetId;
use serde::{Deserialize, Serialize};

/// The place an activity claims to occur: a beach or a bin.
///
/// Owned by the external registry; verification treats it as read-only input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetLocation {
    pub id: TargetId,
    pub point: GeoPoint,
    /// Caller-supplied proximity radius in meters, for activities whose
    /// distance limit is not fixed in the parameter table (cleanups use the
    /// beach-selection radius, safety reports the pin-clustering radius).
    pub radius_m: Option<f64>,
}

impl TargetLocation {
    pub fn new(id: TargetId, point: GeoPoint) -> Self {
        Self {
            id,
            point,
            radius_m: None,
        }
    }

    pub fn with_radius(id: TargetId, point: GeoPoint, radius_m: f64) -> Self {
        Self {
            id,
            point,
            radius_m: Some(radius_m),
        }
    }
}
