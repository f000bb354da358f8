//! The injectable location-provider seam.

use crate::error::LocationError;
use async_trait::async_trait;
use shore_types::GpsSample;
use std::time::Duration;

/// How to acquire a sample.
#[derive(Clone, Copy, Debug)]
pub struct AcquireOptions {
    /// Ask the platform for its best fix (GPS rather than cell/wifi).
    pub high_accuracy: bool,
    /// Deadline for the single-shot acquisition.
    pub timeout: Duration,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
        }
    }
}

/// A source of GPS samples: the device's location API, or a test double.
///
/// Single-shot: one call, one sample or one typed failure. Cancellation is
/// the caller dropping the future; providers must not leave side effects
/// behind when that happens.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn current_sample(&self, opts: &AcquireOptions) -> Result<GpsSample, LocationError>;
}

/// Acquire one sample, enforcing the deadline in `opts`.
///
/// A provider that neither answers nor fails within the deadline yields
/// [`LocationError::Timeout`].
pub async fn acquire(
    provider: &dyn LocationProvider,
    opts: &AcquireOptions,
) -> Result<GpsSample, LocationError> {
    match tokio::time::timeout(opts.timeout, provider.current_sample(opts)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                timeout_ms = opts.timeout.as_millis() as u64,
                "location acquisition timed out"
            );
            Err(LocationError::Timeout)
        }
    }
}
