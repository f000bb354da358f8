//! The submission flow: query prior claims, verify, record atomically.

use crate::error::FlowError;
use crate::schedule::RewardSchedule;
use shore_location::{acquire, AcquireOptions, LocationProvider};
use shore_store::{ClaimRecorder, ClaimStore, StoreError};
use shore_types::{
    ActivityClaim, ActivityType, DuplicateWindow, GpsSample, TargetLocation, UserId,
};
use shore_verify::{GeoVerifier, Verdict, VerifyError};
use std::sync::Arc;

/// What happened to a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    /// The claim was verified, recorded, and the reward credited.
    Recorded {
        claim: ActivityClaim,
        coins_awarded: u64,
    },
    /// Verification rejected the claim; the verdict carries the guidance
    /// numbers for the UI.
    Rejected(Verdict),
    /// Verification accepted, but a concurrent submission won the atomic
    /// record; nothing was credited.
    RaceLost,
}

/// Composes the verifier with its boundary collaborators.
///
/// The collaborators are injected, never hard-wired: production wires the
/// managed-database store, tests wire [`MemoryClaimStore`] and nullable
/// providers.
///
/// [`MemoryClaimStore`]: shore_store::MemoryClaimStore
pub struct RewardFlow {
    verifier: GeoVerifier,
    store: Arc<dyn ClaimStore>,
    recorder: Arc<dyn ClaimRecorder>,
    schedule: RewardSchedule,
}

impl RewardFlow {
    pub fn new(
        verifier: GeoVerifier,
        store: Arc<dyn ClaimStore>,
        recorder: Arc<dyn ClaimRecorder>,
        schedule: RewardSchedule,
    ) -> Self {
        Self {
            verifier,
            store,
            recorder,
            schedule,
        }
    }

    /// Submit a claim for an already-acquired sample.
    pub fn submit(
        &self,
        user: &UserId,
        target: &TargetLocation,
        activity: ActivityType,
        sample: &GpsSample,
    ) -> Result<Submission, FlowError> {
        let rule = self
            .verifier
            .params()
            .rule(activity)
            .ok_or(VerifyError::UnknownActivityType(activity))?;

        // Scope the query to what the window can actually block on.
        let prior_claims = match rule.window {
            DuplicateWindow::SameTargetUtcDay => {
                self.store.query_claims(user, activity, Some(&target.id))?
            }
            DuplicateWindow::RollingAnyTarget { .. } => {
                self.store.query_claims(user, activity, None)?
            }
            DuplicateWindow::None => Vec::new(),
        };

        let verdict = self
            .verifier
            .verify(sample, target, activity, &prior_claims)?;

        let (verified_lat, verified_lng, distance_m, accuracy_m) = match verdict {
            Verdict::Accepted {
                verified_lat,
                verified_lng,
                distance_m,
                accuracy_m,
            } => (verified_lat, verified_lng, distance_m, accuracy_m),
            rejected => {
                tracing::debug!(
                    user = %user,
                    target = %target.id,
                    activity = %activity,
                    verdict = ?rejected,
                    "claim rejected"
                );
                return Ok(Submission::Rejected(rejected));
            }
        };

        let claim = ActivityClaim {
            user: user.clone(),
            target: target.id.clone(),
            activity,
            verified_lat,
            verified_lng,
            distance_m,
            accuracy_m,
            claimed_at: sample.captured_at,
        };
        let coins = self.schedule.coins_for(activity);

        match self.recorder.record_claim_and_reward(&claim, coins) {
            Ok(()) => {
                tracing::info!(
                    user = %user,
                    target = %target.id,
                    activity = %activity,
                    distance_m,
                    coins,
                    "claim recorded"
                );
                Ok(Submission::Recorded {
                    claim,
                    coins_awarded: coins,
                })
            }
            // The atomic recorder is the real duplicate defense; losing the
            // race here is an expected outcome, not a failure.
            Err(StoreError::Duplicate(key)) => {
                tracing::warn!(user = %user, target = %target.id, %key, "lost record race");
                Ok(Submission::RaceLost)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Acquire a fresh sample from `provider` and submit it.
    pub async fn acquire_and_submit(
        &self,
        provider: &dyn LocationProvider,
        opts: &AcquireOptions,
        user: &UserId,
        target: &TargetLocation,
        activity: ActivityType,
    ) -> Result<Submission, FlowError> {
        let sample = acquire(provider, opts).await?;
        self.submit(user, target, activity, &sample)
    }
}
