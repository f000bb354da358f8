//! Nullable location provider: scripted GPS responses.

use async_trait::async_trait;
use shore_location::{AcquireOptions, LocationError, LocationProvider};
use shore_types::GpsSample;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// A location provider that answers from a scripted queue.
///
/// Each acquisition pops the next scripted response; an empty queue acts as
/// an unavailable provider. An optional artificial delay makes timeout
/// behavior testable under tokio's paused clock.
pub struct NullLocationProvider {
    responses: Mutex<VecDeque<Result<GpsSample, LocationError>>>,
    delay: Mutex<Option<Duration>>,
}

impl NullLocationProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            delay: Mutex::new(None),
        }
    }

    /// Script a successful fix.
    pub fn push_sample(&self, sample: GpsSample) {
        self.responses
            .lock()
            .expect("null provider lock poisoned")
            .push_back(Ok(sample));
    }

    /// Script a failure.
    pub fn push_error(&self, error: LocationError) {
        self.responses
            .lock()
            .expect("null provider lock poisoned")
            .push_back(Err(error));
    }

    /// Delay every response, e.g. past the caller's deadline.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().expect("null provider lock poisoned") = Some(delay);
    }
}

impl Default for NullLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationProvider for NullLocationProvider {
    async fn current_sample(&self, _opts: &AcquireOptions) -> Result<GpsSample, LocationError> {
        let delay = *self.delay.lock().expect("null provider lock poisoned");
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .expect("null provider lock poisoned")
            .pop_front()
            .unwrap_or(Err(LocationError::Unavailable))
    }
}
