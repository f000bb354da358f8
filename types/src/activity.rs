//! Activity types users can perform and claim rewards for.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of physical activity a user can claim at a target location.
///
/// The wire names (`cleanup`, `dispose`, `bin_report`, `safety_report`) are
/// stable: they key the external claim storage and the parameter table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// A timed beach-cleaning session.
    Cleanup,
    /// Depositing collected trash into a registered bin.
    Dispose,
    /// Scanning/reporting the state of a registered bin.
    BinReport,
    /// Filing a hazard report (broken glass, stranded animal, rip current).
    SafetyReport,
}

impl ActivityType {
    /// All activity types, in declaration order.
    pub const ALL: [ActivityType; 4] = [
        ActivityType::Cleanup,
        ActivityType::Dispose,
        ActivityType::BinReport,
        ActivityType::SafetyReport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::Cleanup => "cleanup",
            ActivityType::Dispose => "dispose",
            ActivityType::BinReport => "bin_report",
            ActivityType::SafetyReport => "safety_report",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
