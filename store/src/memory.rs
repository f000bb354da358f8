//! In-memory claim store: the reference implementation of the storage
//! contract, and the backend the test suites run against.

use crate::claims::{ClaimRecorder, ClaimStore};
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use shore_types::{ActivityClaim, ActivityType, TargetId, UserId, VerifyParams};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default, Serialize, Deserialize)]
struct Inner {
    claims: Vec<ActivityClaim>,
    balances: HashMap<UserId, u64>,
}

/// Mutex-guarded claim store with atomic record-and-credit.
///
/// The duplicate re-check inside [`record_claim_and_reward`] runs under the
/// same lock as the insert and the coin credit, which is what makes two
/// concurrent accepted verifications unable to both record; the verifier's
/// own prior-claims check is only a pre-flight heuristic.
///
/// [`record_claim_and_reward`]: ClaimRecorder::record_claim_and_reward
pub struct MemoryClaimStore {
    params: VerifyParams,
    inner: Mutex<Inner>,
}

impl MemoryClaimStore {
    pub fn new(params: VerifyParams) -> Self {
        Self {
            params,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Coins credited to `user` so far.
    pub fn coin_balance(&self, user: &UserId) -> u64 {
        let inner = self.inner.lock().expect("claim store lock poisoned");
        inner.balances.get(user).copied().unwrap_or(0)
    }

    /// Total number of stored claims.
    pub fn claim_count(&self) -> usize {
        let inner = self.inner.lock().expect("claim store lock poisoned");
        inner.claims.len()
    }

    /// Serialize all claims and balances.
    pub fn snapshot(&self) -> Result<Vec<u8>, StoreError> {
        let inner = self.inner.lock().expect("claim store lock poisoned");
        bincode::serialize(&*inner).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Restore a store from a [`snapshot`](Self::snapshot).
    pub fn restore(params: VerifyParams, bytes: &[u8]) -> Result<Self, StoreError> {
        let inner: Inner =
            bincode::deserialize(bytes).map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(Self {
            params,
            inner: Mutex::new(inner),
        })
    }
}

impl ClaimStore for MemoryClaimStore {
    fn query_claims(
        &self,
        user: &UserId,
        activity: ActivityType,
        target: Option<&TargetId>,
    ) -> Result<Vec<ActivityClaim>, StoreError> {
        let inner = self.inner.lock().expect("claim store lock poisoned");
        Ok(inner
            .claims
            .iter()
            .filter(|c| c.user == *user && c.activity == activity)
            .filter(|c| target.map_or(true, |t| c.target == *t))
            .cloned()
            .collect())
    }
}

impl ClaimRecorder for MemoryClaimStore {
    fn record_claim_and_reward(
        &self,
        claim: &ActivityClaim,
        reward_coins: u64,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("claim store lock poisoned");

        // Activities without a configured rule cannot pass verification, so
        // no window applies; everything else re-checks under the lock.
        if let Some(rule) = self.params.rule(claim.activity) {
            let blocked = inner
                .claims
                .iter()
                .filter(|prior| prior.user == claim.user && prior.activity == claim.activity)
                .any(|prior| rule.window.blocks(prior, &claim.target, claim.claimed_at));
            if blocked {
                return Err(StoreError::Duplicate(format!(
                    "{} already claimed {} at {}",
                    claim.user, claim.activity, claim.target
                )));
            }
        }

        inner.claims.push(claim.clone());
        *inner.balances.entry(claim.user.clone()).or_insert(0) += reward_coins;
        Ok(())
    }
}
