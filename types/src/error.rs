use crate::activity::ActivityType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("failed to parse verification parameters: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("activity {0} has a non-positive distance limit")]
    InvalidDistance(ActivityType),

    #[error("activity {0} has a non-positive accuracy ceiling")]
    InvalidAccuracy(ActivityType),
}
