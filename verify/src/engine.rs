//! The GeoVerifier engine.

use crate::error::VerifyError;
use crate::verdict::Verdict;
use crate::window::find_blocking;
use shore_types::{
    ActivityClaim, ActivityType, DistanceLimit, GpsSample, TargetLocation, VerifyParams,
};

/// Decides whether a physical-presence claim is trustworthy enough to award
/// coins, and supplies the verified evidence for the claim record.
///
/// Synchronous, stateless and side-effect-free: safe to share across any
/// number of concurrent callers.
pub struct GeoVerifier {
    params: VerifyParams,
}

impl GeoVerifier {
    pub fn new(params: VerifyParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &VerifyParams {
        &self.params
    }

    /// Verify a claim. Expected outcomes come back as [`Verdict`] variants;
    /// `Err` means the caller misused the API.
    ///
    /// Checks run in a fixed order:
    /// 1. distance against the activity's proximity limit; a user who is
    ///    both far away and noisy should hear "move closer" first, since
    ///    that is the correct next action regardless of accuracy;
    /// 2. sample accuracy against the activity's ceiling;
    /// 3. prior claims against the activity's duplicate window, measured
    ///    relative to the sample's capture time.
    ///
    /// Both threshold comparisons are inclusive: a sample exactly at the
    /// limit passes.
    pub fn verify(
        &self,
        sample: &GpsSample,
        target: &TargetLocation,
        activity: ActivityType,
        prior_claims: &[ActivityClaim],
    ) -> Result<Verdict, VerifyError> {
        if !sample.point.is_valid() {
            return Err(VerifyError::InvalidSample("coordinates out of range"));
        }
        if !sample.accuracy_m.is_finite() || sample.accuracy_m < 0.0 {
            return Err(VerifyError::InvalidSample(
                "accuracy must be a finite non-negative number",
            ));
        }

        let rule = self
            .params
            .rule(activity)
            .ok_or(VerifyError::UnknownActivityType(activity))?;
        let required_m = match rule.distance {
            DistanceLimit::Fixed(m) => m,
            DistanceLimit::CallerSupplied => target
                .radius_m
                .ok_or(VerifyError::MissingRadius(activity))?,
        };

        let distance_m = shore_geo::distance_m(&sample.point, &target.point);
        if distance_m > required_m {
            return Ok(Verdict::TooFar {
                distance_m,
                required_m,
            });
        }

        if sample.accuracy_m > rule.max_accuracy_m {
            return Ok(Verdict::AccuracyTooLow {
                accuracy_m: sample.accuracy_m,
                required_m: rule.max_accuracy_m,
            });
        }

        if let Some((blocking, window_resets_at)) =
            find_blocking(&rule.window, &target.id, sample.captured_at, prior_claims)
        {
            return Ok(Verdict::DuplicateClaim {
                prior_claim_at: blocking.claimed_at,
                window_resets_at,
            });
        }

        Ok(Verdict::Accepted {
            verified_lat: sample.point.lat,
            verified_lng: sample.point.lng,
            distance_m,
            accuracy_m: sample.accuracy_m,
        })
    }
}

/// Default uses the shipped coastal policy.
impl Default for GeoVerifier {
    fn default() -> Self {
        Self::new(VerifyParams::coastal_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shore_types::time::SECS_PER_DAY;
    use shore_types::{
        ActivityRule, DuplicateWindow, GeoPoint, TargetId, Timestamp, UserId,
    };
    use std::collections::HashMap;

    const BEACH: (f64, f64) = (13.3500, 74.7000);

    fn sample(lat: f64, lng: f64, accuracy: f64, at: u64) -> GpsSample {
        GpsSample::new(GeoPoint::new(lat, lng), accuracy, Timestamp::new(at))
    }

    fn bin_target() -> TargetLocation {
        TargetLocation::new(TargetId::new("bin-1"), GeoPoint::new(BEACH.0, BEACH.1))
    }

    fn prior_claim(target: &str, activity: ActivityType, at: u64) -> ActivityClaim {
        ActivityClaim {
            user: UserId::new("u1"),
            target: TargetId::new(target),
            activity,
            verified_lat: BEACH.0,
            verified_lng: BEACH.1,
            distance_m: 1.0,
            accuracy_m: 5.0,
            claimed_at: Timestamp::new(at),
        }
    }

    fn verifier() -> GeoVerifier {
        GeoVerifier::default()
    }

    #[test]
    fn bin_report_at_target_is_accepted_with_zero_distance() {
        let verdict = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, 1000),
                &bin_target(),
                ActivityType::BinReport,
                &[],
            )
            .unwrap();
        assert_eq!(
            verdict,
            Verdict::Accepted {
                verified_lat: BEACH.0,
                verified_lng: BEACH.1,
                distance_m: 0.0,
                accuracy_m: 5.0,
            }
        );
    }

    #[test]
    fn dispose_55m_away_is_too_far() {
        // Target ~55.6 m north; dispose threshold is 10 m.
        let target = TargetLocation::new(
            TargetId::new("bin-1"),
            GeoPoint::new(13.3505, 74.7000),
        );
        let verdict = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, 1000),
                &target,
                ActivityType::Dispose,
                &[],
            )
            .unwrap();
        match verdict {
            Verdict::TooFar {
                distance_m,
                required_m,
            } => {
                assert!((distance_m - 55.6).abs() < 0.1, "got {distance_m}");
                assert_eq!(required_m, 10.0);
            }
            other => panic!("expected TooFar, got {other:?}"),
        }
    }

    #[test]
    fn noisy_dispose_sample_is_accuracy_too_low() {
        // Within 5 m of the target but 25 m accuracy against a 10 m ceiling.
        let verdict = verifier()
            .verify(
                &sample(BEACH.0 + 0.00003, BEACH.1, 25.0, 1000),
                &bin_target(),
                ActivityType::Dispose,
                &[],
            )
            .unwrap();
        assert_eq!(
            verdict,
            Verdict::AccuracyTooLow {
                accuracy_m: 25.0,
                required_m: 10.0,
            }
        );
    }

    #[test]
    fn far_and_noisy_reports_too_far_first() {
        // Moving closer is the right next action regardless of accuracy.
        let target = TargetLocation::new(
            TargetId::new("bin-1"),
            GeoPoint::new(13.3505, 74.7000),
        );
        let verdict = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 50.0, 1000),
                &target,
                ActivityType::Dispose,
                &[],
            )
            .unwrap();
        assert!(matches!(verdict, Verdict::TooFar { .. }));
    }

    #[test]
    fn bin_report_same_utc_day_is_duplicate() {
        // One prior claim for the same bin 3 hours earlier, same UTC day.
        let now = 10 * SECS_PER_DAY + 8 * 3600;
        let prior = prior_claim("bin-1", ActivityType::BinReport, now - 3 * 3600);
        let verdict = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, now),
                &bin_target(),
                ActivityType::BinReport,
                &[prior.clone()],
            )
            .unwrap();
        assert_eq!(
            verdict,
            Verdict::DuplicateClaim {
                prior_claim_at: prior.claimed_at,
                window_resets_at: Timestamp::new(11 * SECS_PER_DAY),
            }
        );
    }

    #[test]
    fn bin_report_next_utc_day_is_accepted() {
        let prior = prior_claim(
            "bin-1",
            ActivityType::BinReport,
            10 * SECS_PER_DAY + 23 * 3600,
        );
        let verdict = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, 11 * SECS_PER_DAY + 60),
                &bin_target(),
                ActivityType::BinReport,
                &[prior],
            )
            .unwrap();
        assert!(verdict.is_accepted());
    }

    #[test]
    fn bin_report_other_bin_same_day_is_accepted() {
        let now = 10 * SECS_PER_DAY + 8 * 3600;
        let prior = prior_claim("bin-2", ActivityType::BinReport, now - 3600);
        let verdict = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, now),
                &bin_target(),
                ActivityType::BinReport,
                &[prior],
            )
            .unwrap();
        assert!(verdict.is_accepted());
    }

    #[test]
    fn dispose_nine_minutes_later_is_duplicate() {
        let prior = prior_claim("bin-other", ActivityType::Dispose, 10_000);
        let verdict = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, 10_000 + 9 * 60),
                &bin_target(),
                ActivityType::Dispose,
                &[prior.clone()],
            )
            .unwrap();
        assert_eq!(
            verdict,
            Verdict::DuplicateClaim {
                prior_claim_at: prior.claimed_at,
                window_resets_at: Timestamp::new(10_600),
            }
        );
    }

    #[test]
    fn dispose_ten_minutes_one_second_later_is_accepted() {
        let prior = prior_claim("bin-other", ActivityType::Dispose, 10_000);
        let verdict = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, 10_000 + 10 * 60 + 1),
                &bin_target(),
                ActivityType::Dispose,
                &[prior],
            )
            .unwrap();
        assert!(verdict.is_accepted());
    }

    #[test]
    fn cleanup_and_safety_report_ignore_prior_claims() {
        let beach = TargetLocation::with_radius(
            TargetId::new("beach-1"),
            GeoPoint::new(BEACH.0, BEACH.1),
            100.0,
        );
        let prior = prior_claim("beach-1", ActivityType::Cleanup, 990);
        for activity in [ActivityType::Cleanup, ActivityType::SafetyReport] {
            let verdict = verifier()
                .verify(
                    &sample(BEACH.0, BEACH.1, 5.0, 1000),
                    &beach,
                    activity,
                    std::slice::from_ref(&prior),
                )
                .unwrap();
            assert!(verdict.is_accepted(), "{activity} should accept");
        }
    }

    #[test]
    fn caller_supplied_radius_is_required() {
        // A beach target without a radius cannot gate a cleanup.
        let beach = TargetLocation::new(
            TargetId::new("beach-1"),
            GeoPoint::new(BEACH.0, BEACH.1),
        );
        let err = verifier()
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, 1000),
                &beach,
                ActivityType::Cleanup,
                &[],
            )
            .unwrap_err();
        assert_eq!(err, VerifyError::MissingRadius(ActivityType::Cleanup));
    }

    #[test]
    fn unconfigured_activity_is_an_error() {
        let verifier = GeoVerifier::new(VerifyParams {
            rules: HashMap::new(),
        });
        let err = verifier
            .verify(
                &sample(BEACH.0, BEACH.1, 5.0, 1000),
                &bin_target(),
                ActivityType::Dispose,
                &[],
            )
            .unwrap_err();
        assert_eq!(err, VerifyError::UnknownActivityType(ActivityType::Dispose));
    }

    #[test]
    fn malformed_samples_are_rejected_before_any_check() {
        let v = verifier();
        let target = bin_target();

        for bad in [
            sample(BEACH.0, BEACH.1, f64::NAN, 1000),
            sample(BEACH.0, BEACH.1, f64::INFINITY, 1000),
            sample(BEACH.0, BEACH.1, -1.0, 1000),
            sample(91.0, BEACH.1, 5.0, 1000),
            sample(BEACH.0, 181.0, 5.0, 1000),
        ] {
            let err = v
                .verify(&bad, &target, ActivityType::BinReport, &[])
                .unwrap_err();
            assert!(matches!(err, VerifyError::InvalidSample(_)), "{bad:?}");
        }
    }

    #[test]
    fn distance_boundary_is_inclusive() {
        // Pin the threshold to the exact computed distance: at the limit
        // passes, a centimeter under it fails.
        let target = TargetLocation::new(
            TargetId::new("bin-1"),
            GeoPoint::new(13.3501, 74.7000),
        );
        let s = sample(BEACH.0, BEACH.1, 5.0, 1000);
        let exact = shore_geo::distance_m(&s.point, &target.point);

        let mut rules = HashMap::new();
        rules.insert(
            ActivityType::Dispose,
            ActivityRule {
                distance: DistanceLimit::Fixed(exact),
                max_accuracy_m: 10.0,
                window: DuplicateWindow::RollingAnyTarget { secs: 600 },
            },
        );
        let at_limit = GeoVerifier::new(VerifyParams { rules: rules.clone() });
        assert!(at_limit
            .verify(&s, &target, ActivityType::Dispose, &[])
            .unwrap()
            .is_accepted());

        rules.get_mut(&ActivityType::Dispose).unwrap().distance =
            DistanceLimit::Fixed(exact - 0.01);
        let under_limit = GeoVerifier::new(VerifyParams { rules });
        assert!(matches!(
            under_limit
                .verify(&s, &target, ActivityType::Dispose, &[])
                .unwrap(),
            Verdict::TooFar { .. }
        ));
    }

    #[test]
    fn accuracy_boundary_is_inclusive() {
        let v = verifier();
        let target = bin_target();

        // Dispose ceiling is exactly 10 m.
        let verdict = v
            .verify(
                &sample(BEACH.0, BEACH.1, 10.0, 1000),
                &target,
                ActivityType::Dispose,
                &[],
            )
            .unwrap();
        assert!(verdict.is_accepted());

        let verdict = v
            .verify(
                &sample(BEACH.0, BEACH.1, 10.01, 1000),
                &target,
                ActivityType::Dispose,
                &[],
            )
            .unwrap();
        assert_eq!(
            verdict,
            Verdict::AccuracyTooLow {
                accuracy_m: 10.01,
                required_m: 10.0,
            }
        );
    }

    #[test]
    fn accepted_coordinates_are_the_samples_not_the_targets() {
        // User 3 m or so off the bin; the record must prove where the
        // device was, not where the bin is.
        let user_lat = BEACH.0 + 0.00002;
        let verdict = verifier()
            .verify(
                &sample(user_lat, BEACH.1, 5.0, 1000),
                &bin_target(),
                ActivityType::BinReport,
                &[],
            )
            .unwrap();
        match verdict {
            Verdict::Accepted {
                verified_lat,
                verified_lng,
                distance_m,
                ..
            } => {
                assert_eq!(verified_lat, user_lat);
                assert_eq!(verified_lng, BEACH.1);
                assert!(distance_m > 0.0);
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
    }

    #[test]
    fn verdict_serializes_with_stable_kind_tag() {
        let verdict = Verdict::TooFar {
            distance_m: 55.64,
            required_m: 10.0,
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(json["kind"], "too_far");
        assert_eq!(json["distance_m"], 55.64);
        assert_eq!(json["required_m"], 10.0);
    }
}
