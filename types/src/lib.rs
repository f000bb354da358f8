//! Fundamental types for the SHORE coastal-cleanup rewards system.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: user/target identifiers, timestamps, geographic points, GPS
//! samples, activity types, activity claims, and the verification parameter
//! table.

pub mod activity;
pub mod claim;
pub mod error;
pub mod geo;
pub mod id;
pub mod params;
pub mod sample;
pub mod target;
pub mod time;

pub use activity::ActivityType;
pub use claim::ActivityClaim;
pub use error::ParamsError;
pub use geo::GeoPoint;
pub use id::{TargetId, UserId};
pub use params::{ActivityRule, DistanceLimit, DuplicateWindow, VerifyParams};
pub use sample::GpsSample;
pub use target::TargetLocation;
pub use time::Timestamp;
