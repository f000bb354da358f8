//! User-facing guidance strings built from rejection verdicts.
//!
//! The verdict carries the raw numbers; this module is the one place they
//! get rendered. Call sites that need localized text should render from the
//! verdict directly instead.

use shore_types::Timestamp;
use shore_utils::format_duration;
use shore_verify::Verdict;

/// A "what to do next" line for a rejected claim, or `None` when the claim
/// was accepted.
pub fn retry_guidance(verdict: &Verdict, now: Timestamp) -> Option<String> {
    match verdict {
        Verdict::Accepted { .. } => None,
        Verdict::TooFar {
            distance_m,
            required_m,
        } => Some(format!(
            "move closer: you are {distance_m:.0} m away, need to be within {required_m:.0} m"
        )),
        Verdict::AccuracyTooLow {
            accuracy_m,
            required_m,
        } => Some(format!(
            "GPS reading too imprecise ({accuracy_m:.0} m, need {required_m:.0} m or better); \
             step away from buildings and retry"
        )),
        Verdict::DuplicateClaim {
            window_resets_at, ..
        } => {
            let wait = window_resets_at.as_secs().saturating_sub(now.as_secs());
            Some(format!("already claimed; try again in {}", format_duration(wait)))
        }
    }
}
