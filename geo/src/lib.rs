//! Great-circle distance math for location verification.
//!
//! All distances the verifier produces go through [`round_cm`]: centimeter
//! precision keeps stored distances and threshold comparisons free of float
//! noise.

use shore_types::GeoPoint;

/// Mean Earth radius in meters (spherical model).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points in meters, via the haversine
/// formula on a spherical Earth.
pub fn haversine_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Round a distance to 2 decimal places (centimeters).
pub fn round_cm(meters: f64) -> f64 {
    (meters * 100.0).round() / 100.0
}

/// [`haversine_m`] rounded to centimeters, the form the verifier stores and
/// compares against thresholds.
pub fn distance_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    round_cm(haversine_m(a, b))
}
