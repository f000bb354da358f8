//! GPS sample acquisition boundary.
//!
//! Verification itself never talks to the platform's location API; it runs
//! only after a sample exists. This crate defines the injectable provider
//! seam, the typed acquisition failures the caller maps to user guidance,
//! and the explicit freshness policy that replaces ambient location caches.

pub mod error;
pub mod freshness;
pub mod provider;

pub use error::LocationError;
pub use freshness::FreshnessPolicy;
pub use provider::{acquire, AcquireOptions, LocationProvider};
