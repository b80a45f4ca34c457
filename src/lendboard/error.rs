use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    /// The backing collection could not be fetched and nothing was cached.
    #[error("Failed to load dashboard data: {0}")]
    DataUnavailable(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Not logged in. Run `lendboard login` first")]
    NotAuthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid status: {0} (expected Active, Inactive, Pending or Blacklisted)")]
    InvalidStatus(String),

    #[error("Items per page must be greater than zero")]
    InvalidPageSize,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashError>;
