//! Reward flow for the SHORE coastal-cleanup system.
//!
//! This is the caller layer the verifier was designed for: it acquires a
//! sample, queries prior claims, runs verification, and persists accepted
//! claims through the atomic recorder. It also owns the gates that are
//! deliberately *not* the verifier's job: the cleanup minimum-duration
//! rule, safety-report severity escalation, and the evidence-check override
//! boundary.

pub mod error;
pub mod evidence;
pub mod flow;
pub mod guidance;
pub mod safety;
pub mod schedule;
pub mod session;

pub use error::FlowError;
pub use evidence::{evidence_passes, EvidenceCheck};
pub use flow::{RewardFlow, Submission};
pub use guidance::retry_guidance;
pub use safety::{safety_severity, Severity};
pub use schedule::RewardSchedule;
pub use session::CleanupSession;
