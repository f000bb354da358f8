use proptest::prelude::*;

use shore_geo::{distance_m, haversine_m, round_cm, EARTH_RADIUS_M};
use shore_types::GeoPoint;

fn arb_point() -> impl Strategy<Value = GeoPoint> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| GeoPoint::new(lat, lng))
}

proptest! {
    /// distance(A, B) == distance(B, A).
    #[test]
    fn symmetry(a in arb_point(), b in arb_point()) {
        let d_ab = haversine_m(&a, &b);
        let d_ba = haversine_m(&b, &a);
        prop_assert!((d_ab - d_ba).abs() < 1e-6, "ab={d_ab}, ba={d_ba}");
    }

    /// distance(A, A) == 0.
    #[test]
    fn zero_identity(a in arb_point()) {
        prop_assert_eq!(distance_m(&a, &a), 0.0);
    }

    /// Distances are non-negative and bounded by half the Earth's circumference.
    #[test]
    fn bounded(a in arb_point(), b in arb_point()) {
        let d = haversine_m(&a, &b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= EARTH_RADIUS_M * std::f64::consts::PI + 1.0);
    }

    /// Rounding to centimeters is idempotent.
    #[test]
    fn round_cm_idempotent(meters in 0.0f64..20_000_000.0) {
        let once = round_cm(meters);
        prop_assert_eq!(round_cm(once), once);
    }

    /// Rounding never moves a value by more than half a centimeter.
    #[test]
    fn round_cm_close(meters in 0.0f64..20_000_000.0) {
        prop_assert!((round_cm(meters) - meters).abs() <= 0.005 + 1e-6);
    }
}
