//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(#[from] clap::Error),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// A failed child keeps its own code; help and version requests
    /// arrive as clap errors with code 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(e) => e.exit_code(),
            CliError::Application(e) => match e {
                ApplicationError::CommandFailed { exit_code, .. } if *exit_code > 0 => *exit_code,
                ApplicationError::Interrupted => exitcode::INTERRUPTED,
                _ => exitcode::FAILURE,
            },
        }
    }
}
