use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The uniqueness key (user, target, activity, window) is already taken.
    #[error("duplicate claim: {0}")]
    Duplicate(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
