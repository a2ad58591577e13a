//! Process exit codes
//!
//! A failing child keeps its own exit code; these cover everything else.

/// Successful termination
pub const OK: i32 = 0;

/// Tool missing, bad configuration, or any other failure
pub const FAILURE: i32 = 1;

/// Command line usage error (clap's convention)
pub const USAGE: i32 = 2;

/// Interrupted by Ctrl-C (128 + SIGINT)
pub const INTERRUPTED: i32 = 130;
