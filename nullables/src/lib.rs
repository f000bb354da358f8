//! Nullable infrastructure for deterministic testing.
//!
//! The external dependencies of the verification flow (clock, device
//! location API) are abstracted behind traits. This crate provides
//! test-friendly implementations that return scripted values, can be
//! controlled programmatically, and never touch real hardware.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod clock;
pub mod location;

pub use clock::NullClock;
pub use location::NullLocationProvider;
