//! Claim storage for the SHORE rewards system.
//!
//! The verifier never touches storage; callers query prior claims through
//! [`ClaimStore`] and persist accepted ones through [`ClaimRecorder`]. The
//! recorder is the actual defense against double-crediting: it must accept
//! or reject atomically under the activity's duplicate window, because two
//! concurrent verifications can both pass the verifier's pre-flight check.
//!
//! [`MemoryClaimStore`] is the reference implementation; production backends
//! implement the same traits over the managed database.

pub mod claims;
pub mod error;
pub mod memory;

pub use claims::{ClaimRecorder, ClaimStore};
pub use error::StoreError;
pub use memory::MemoryClaimStore;
