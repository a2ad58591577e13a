//! I/O boundary traits for testability
//!
//! The only external I/O is spawning the orchestration tool, so this is
//! the seam services are tested through.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::domain::{ActionResult, Invocation};
use crate::infrastructure::interrupt;

/// External command runner abstraction.
pub trait CommandRunner: Send + Sync {
    /// Run an invocation with inherited stdin/stdout/stderr and wait for it.
    ///
    /// Errors:
    /// - `NotFound`: the program could not be located
    /// - `Interrupted`: the user pressed Ctrl-C before or while it ran
    fn status(&self, invocation: &Invocation, cwd: Option<&Path>) -> io::Result<ActionResult>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real command runner: spawns the child and streams its output live.
#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn status(&self, invocation: &Invocation, cwd: Option<&Path>) -> io::Result<ActionResult> {
        if interrupt::interrupted() {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }

        let mut command = Command::new(invocation.program());
        command.args(invocation.args());
        if let Some(dir) = cwd {
            // a missing cwd also surfaces as NotFound from spawn, which would
            // be misreported as a missing tool
            if !dir.is_dir() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("project directory not found: {}", dir.display()),
                ));
            }
            command.current_dir(dir);
        }

        let status = command.status()?;
        debug!("status: {} -> {}", invocation, status);

        if interrupt::interrupted() {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        Ok(to_action_result(status))
    }
}

/// Runner for `--dry-run`: prints what would run and reports success.
#[derive(Debug, Default)]
pub struct DryRunCommandRunner;

impl CommandRunner for DryRunCommandRunner {
    fn status(&self, invocation: &Invocation, cwd: Option<&Path>) -> io::Result<ActionResult> {
        match cwd {
            Some(dir) => println!("Would run: {} (in {})", invocation, dir.display()),
            None => println!("Would run: {}", invocation),
        }
        Ok(ActionResult::SUCCESS)
    }
}

/// Convert a child's termination status into an exit code.
///
/// On Unix a child killed by signal N reports `128 + N`, as shells do.
pub fn to_action_result(status: ExitStatus) -> ActionResult {
    if let Some(code) = status.code() {
        return ActionResult::from_code(code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return ActionResult::from_code(128 + signal);
        }
    }
    ActionResult::from_code(crate::exitcode::FAILURE)
}
