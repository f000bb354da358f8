//! Activity location verification.
//!
//! [`GeoVerifier`] decides whether a user claiming to perform a physical
//! action (cleanup, disposal, bin report, safety report) is actually present
//! at the claimed location, within required precision, and has not already
//! exploited the same claim. It gates coin issuance against spoofing.
//!
//! The verifier is a pure function over its inputs: no clock reads, no
//! storage access, no side effects. Prior claims are supplied by the caller,
//! and the caller persists accepted claims through an atomic recorder; the
//! pre-flight duplicate check here is a heuristic, never the sole defense
//! against double-crediting races.
//!
//! There is deliberately no override parameter. The product's manual
//! override bypasses the *evidence check* (content detection) at the caller
//! layer; distance, accuracy, and duplicate rules are enforced uniformly.

pub mod engine;
pub mod error;
pub mod verdict;
mod window;

pub use engine::GeoVerifier;
pub use error::VerifyError;
pub use verdict::Verdict;
