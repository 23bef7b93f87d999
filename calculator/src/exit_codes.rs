//! Stable exit codes for calculator CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, unreadable input or other errors.
pub const INVALID: i32 = 1;
/// `calculator press` finished with the error indicator on the display.
pub const DISPLAY_ERROR: i32 = 2;
