//! Stable exit codes for the `advent` CLI.

/// Every requested puzzle was solved.
pub const OK: i32 = 0;
/// Invalid configuration or an I/O failure before any puzzle ran.
pub const INVALID: i32 = 1;
/// At least one requested puzzle failed (missing input, parse error, not implemented).
pub const UNSOLVED: i32 = 3;
