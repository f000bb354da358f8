//! Evidence-check results and the manual-override boundary.
//!
//! The override exists for degraded automated content detection ("is there
//! actually trash in this photo"), and for nothing else. Geo-verification
//! has no override path: a user who is too far away, too noisy, or inside a
//! duplicate window stays rejected no matter what the evidence check said.

use serde::{Deserialize, Serialize};

/// Outcome of the upstream content-detection step, carried as a typed kind;
/// callers must never pattern-match on human-readable text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceCheck {
    /// The detector confirmed the expected evidence.
    Detected,
    /// The detector ran and found nothing, the only state the manual
    /// override may bypass.
    NotDetected,
    /// The detector was not run (service unavailable, feature off).
    Skipped,
}

/// Whether the evidence gate passes, given the user's override choice.
pub fn evidence_passes(check: EvidenceCheck, manual_override: bool) -> bool {
    match check {
        EvidenceCheck::Detected | EvidenceCheck::Skipped => true,
        EvidenceCheck::NotDetected => manual_override,
    }
}
