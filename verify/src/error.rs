use shore_types::ActivityType;
use thiserror::Error;

/// Programming errors: the caller passed malformed input.
///
/// These are never retried and never reach users as guidance; expected
/// verification outcomes are [`Verdict`](crate::Verdict) variants instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("invalid GPS sample: {0}")]
    InvalidSample(&'static str),

    #[error("no verification rule configured for activity {0}")]
    UnknownActivityType(ActivityType),

    #[error("activity {0} requires a caller-supplied radius but the target has none")]
    MissingRadius(ActivityType),
}
