use thiserror::Error;

use crate::core::client::database::DatabaseError;

/// Result type for provisioner operations
pub type ProvisionerResult<T> = Result<T, ProvisionerError>;

/// Error types for the provisioner
#[derive(Error, Debug)]
pub enum ProvisionerError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DatabaseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Resource Setup error
    #[error("Resource setup error: {0}")]
    ResourceSetupError(String),
}
