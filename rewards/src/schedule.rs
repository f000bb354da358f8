//! Coin amounts per activity.

use serde::{Deserialize, Serialize};
use shore_types::ActivityType;

/// Coins credited per accepted activity claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSchedule {
    pub cleanup: u64,
    pub dispose: u64,
    pub bin_report: u64,
    pub safety_report: u64,
}

impl RewardSchedule {
    /// The shipped coin schedule.
    pub fn coastal_defaults() -> Self {
        Self {
            cleanup: 50,
            dispose: 15,
            bin_report: 10,
            safety_report: 5,
        }
    }

    pub fn coins_for(&self, activity: ActivityType) -> u64 {
        match activity {
            ActivityType::Cleanup => self.cleanup,
            ActivityType::Dispose => self.dispose,
            ActivityType::BinReport => self.bin_report,
            ActivityType::SafetyReport => self.safety_report,
        }
    }
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self::coastal_defaults()
    }
}
