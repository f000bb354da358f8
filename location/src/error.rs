use thiserror::Error;

/// Why a GPS sample could not be acquired.
///
/// These surface to the caller, which decides whether to retry; nothing in
/// this crate retries on its own.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission denied by the user or platform")]
    PermissionDenied,

    #[error("location provider unavailable")]
    Unavailable,

    #[error("timed out waiting for a location fix")]
    Timeout,
}
