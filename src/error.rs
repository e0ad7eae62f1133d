//! Error types for the subreal CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for subreal operations.
///
/// Each variant maps to a specific exit code. Per-entry problems during
/// scanning, cleaning and renaming are reported as data by the components
/// and never surface as one of these.
#[derive(Error, Debug)]
pub enum SubrealError {
    /// User provided invalid arguments or the project is not where the config says.
    #[error("{0}")]
    UserError(String),

    /// The requested project name was rejected.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A filesystem operation the command depends on failed.
    #[error("Filesystem operation failed: {0}")]
    FilesystemError(String),

    /// The build tool or editor could not be run.
    #[error("Process failed: {0}")]
    ProcessError(String),

    /// The rename transaction completed with errors.
    #[error("Rename failed: {0}")]
    RenameError(String),
}

impl SubrealError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SubrealError::UserError(_) => exit_codes::USER_ERROR,
            SubrealError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            SubrealError::FilesystemError(_) => exit_codes::FILESYSTEM_FAILURE,
            SubrealError::ProcessError(_) => exit_codes::PROCESS_FAILURE,
            SubrealError::RenameError(_) => exit_codes::RENAME_FAILURE,
        }
    }
}

/// Result type alias for subreal operations.
pub type Result<T> = std::result::Result<T, SubrealError>;
