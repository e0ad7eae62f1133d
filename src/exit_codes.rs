//! Exit code constants for the subreal CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, missing project, invalid config)
//! - 2: Validation failure (rejected project name)
//! - 3: Filesystem failure (backup copy, manifest write)
//! - 4: Process failure (build tool or editor)
//! - 5: Rename transaction finished with errors

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing project, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the requested project name was rejected.
pub const VALIDATION_FAILURE: i32 = 2;

/// Filesystem failure that aborted the command before or during mutation.
pub const FILESYSTEM_FAILURE: i32 = 3;

/// Build tool or editor could not be run, failed, or timed out.
pub const PROCESS_FAILURE: i32 = 4;

/// Rename finished with one or more failed steps.
pub const RENAME_FAILURE: i32 = 5;
