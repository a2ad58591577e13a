//! Domain entities: core data structures

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::DomainError;

/// A lifecycle action requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start all services, detached unless told otherwise
    Up { detach: bool },
    /// Stop and remove all services
    Down { volumes: bool },
    /// Restart all services
    Restart,
    /// Show service status
    Status,
    /// Show (or follow) logs, optionally for a single service
    Logs {
        follow: bool,
        service: Option<String>,
    },
}

impl Action {
    /// Name of the action as typed by the user.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Up { .. } => "up",
            Action::Down { .. } => "down",
            Action::Restart => "restart",
            Action::Status => "status",
            Action::Logs { .. } => "logs",
        }
    }

    /// Actions followed by a status listing once they succeed.
    pub fn shows_status_after(&self) -> bool {
        matches!(self, Action::Up { .. } | Action::Restart)
    }
}

/// An external command as an ordered, non-empty token list.
///
/// The first token is the program, the rest are its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from raw tokens.
    ///
    /// Fails with [`DomainError::EmptyCommand`] when there is no program token.
    pub fn new<I, S>(tokens: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = tokens.into_iter().map(Into::into);
        let program = tokens
            .next()
            .filter(|p| !p.trim().is_empty())
            .ok_or(DomainError::EmptyCommand)?;
        Ok(Self {
            program,
            args: tokens.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// All tokens, program first.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    pub(crate) fn arg(mut self, token: impl Into<String>) -> Self {
        self.args.push(token.into());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

/// The orchestration tool together with the file it operates on.
///
/// Every invocation is derived from this pair, so an empty tool command
/// is rejected here once instead of at each call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeProject {
    command: Invocation,
    file: PathBuf,
}

impl ComposeProject {
    pub fn new(command: &[String], file: impl Into<PathBuf>) -> Result<Self, DomainError> {
        Ok(Self {
            command: Invocation::new(command.iter().cloned())?,
            file: file.into(),
        })
    }

    /// Tool invocation without any subcommand, e.g. `docker compose`.
    pub fn command(&self) -> &Invocation {
        &self.command
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// Outcome of one external command.
///
/// The exit code is never negative; platform codes that are (Windows
/// NTSTATUS values) collapse to a generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionResult {
    exit_code: i32,
}

impl ActionResult {
    pub const SUCCESS: ActionResult = ActionResult { exit_code: 0 };

    pub fn from_code(code: i32) -> Self {
        Self {
            exit_code: if code < 0 {
                crate::exitcode::FAILURE
            } else {
                code
            },
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
