use shore_location::LocationError;
use shore_store::StoreError;
use shore_verify::VerifyError;
use thiserror::Error;

/// Failures of the submission flow itself.
///
/// Rejected verdicts are not errors; they come back inside
/// [`Submission`](crate::Submission) so call sites dispatch on kind instead
/// of unwinding.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("verification error: {0}")]
    Verify(#[from] VerifyError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("location error: {0}")]
    Location(#[from] LocationError),
}
