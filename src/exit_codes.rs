//! Exit code constants for the licsync CLI.
//!
//! - 0: Success
//! - 1: Configuration error (missing/invalid field, bad config file, unknown task)
//! - 2: Fetch failure (bad URL, network error, non-2xx, empty body)
//! - 3: I/O failure (reading the template, writing outputs)
//! - 4: Build failure (the configured assemble command failed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Configuration error: a required field is unset or invalid.
pub const CONFIGURATION_ERROR: i32 = 1;

/// Fetch failure: the canonical license could not be retrieved.
pub const FETCH_FAILURE: i32 = 2;

/// I/O failure: a file could not be read, or an output could not be written.
pub const IO_FAILURE: i32 = 3;

/// Build failure: the assemble command could not be started or exited non-zero.
pub const BUILD_FAILURE: i32 = 4;
