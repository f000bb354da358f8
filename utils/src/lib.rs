//! Shared utilities for the SHORE rewards system.

pub mod logging;
pub mod time;

pub use logging::init_tracing;
pub use time::format_duration;
