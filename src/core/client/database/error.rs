use mongodb::error::{Error as MongoError, ErrorKind};
use thiserror::Error;

// Server error codes the provisioner cares about. Anything else is passed
// through as a raw driver error.
const UNAUTHORIZED: i32 = 13;
const AUTHENTICATION_FAILED: i32 = 18;
const INDEX_OPTIONS_CONFLICT: i32 = 85;
const INDEX_KEY_SPECS_CONFLICT: i32 = 86;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to reach database: {0}")]
    ConnectionError(String),

    #[error("Insufficient privileges for schema operation: {0}")]
    PermissionError(String),

    #[error("Index name already exists with an incompatible definition: {0}")]
    DuplicateIndexName(String),

    #[error("MongoDB error: {0}")]
    Driver(MongoError),
}

impl From<MongoError> for DatabaseError {
    fn from(err: MongoError) -> Self {
        let classified = match err.kind.as_ref() {
            ErrorKind::Authentication { message, .. } => Some(DatabaseError::ConnectionError(message.clone())),
            ErrorKind::ServerSelection { message, .. } => Some(DatabaseError::ConnectionError(message.clone())),
            ErrorKind::DnsResolve { message, .. } => Some(DatabaseError::ConnectionError(message.clone())),
            ErrorKind::Io(io_err) => Some(DatabaseError::ConnectionError(io_err.to_string())),
            ErrorKind::Command(command_error) => classify_command_error(command_error.code, &command_error.message),
            _ => None,
        };
        classified.unwrap_or_else(|| DatabaseError::Driver(err))
    }
}

/// Map a server command error onto the provisioner's error taxonomy.
/// Returns `None` when the code is not one the provisioner distinguishes.
fn classify_command_error(code: i32, message: &str) -> Option<DatabaseError> {
    match code {
        UNAUTHORIZED => Some(DatabaseError::PermissionError(message.to_string())),
        AUTHENTICATION_FAILED => Some(DatabaseError::ConnectionError(message.to_string())),
        INDEX_OPTIONS_CONFLICT | INDEX_KEY_SPECS_CONFLICT => {
            Some(DatabaseError::DuplicateIndexName(message.to_string()))
        }
        _ => None,
    }
}
