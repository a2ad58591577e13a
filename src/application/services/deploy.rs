//! Compose lifecycle service
//!
//! Turns an [`Action`] into exactly one invocation of the orchestration tool,
//! runs it through the [`CommandRunner`] seam, and classifies the outcome:
//! missing binary, non-zero exit, or user interrupt.

use std::io;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{build_invocation, Action, ActionResult, ComposeProject, Invocation};
use crate::infrastructure::traits::CommandRunner;

/// Compose lifecycle service.
pub struct DeployService {
    cmd: Arc<dyn CommandRunner>,
    settings: Arc<Settings>,
    project: ComposeProject,
}

impl DeployService {
    /// Create a new deploy service.
    ///
    /// Fails with `Domain(EmptyCommand)` if `compose_command` has no tokens.
    pub fn new(cmd: Arc<dyn CommandRunner>, settings: Arc<Settings>) -> ApplicationResult<Self> {
        let project = ComposeProject::new(&settings.compose_command, &settings.compose_file)?;
        Ok(Self {
            cmd,
            settings,
            project,
        })
    }

    pub fn project(&self) -> &ComposeProject {
        &self.project
    }

    /// The command line `action` maps to.
    pub fn invocation(&self, action: &Action) -> Invocation {
        build_invocation(&self.project, action)
    }

    /// Run `action` and require a zero exit code.
    ///
    /// # Errors
    /// - `ToolUnavailable` if the tool binary is missing
    /// - `CommandFailed` carrying the child's exit code if it exits non-zero
    /// - `Interrupted` if the user pressed Ctrl-C
    #[instrument(skip(self), fields(action = action.name()))]
    pub fn execute(&self, action: &Action) -> ApplicationResult<ActionResult> {
        let invocation = self.invocation(action);
        let result = self.spawn(&invocation)?;
        if !result.success() {
            return Err(ApplicationError::CommandFailed {
                command: invocation.to_string(),
                exit_code: result.exit_code(),
            });
        }
        Ok(result)
    }

    /// Run `action` and hand back the result whatever the exit code.
    ///
    /// Spawn failures and interrupts are still errors.
    #[instrument(skip(self), fields(action = action.name()))]
    pub fn run(&self, action: &Action) -> ApplicationResult<ActionResult> {
        let invocation = self.invocation(action);
        self.spawn(&invocation)
    }

    fn spawn(&self, invocation: &Invocation) -> ApplicationResult<ActionResult> {
        info!("Running: {}", invocation);
        let result = self
            .cmd
            .status(invocation, self.settings.project_dir.as_deref())
            .map_err(|e| classify_spawn_error(invocation, e))?;
        debug!("exit code: {}", result.exit_code());
        Ok(result)
    }
}

fn classify_spawn_error(invocation: &Invocation, e: io::Error) -> ApplicationError {
    match e.kind() {
        io::ErrorKind::NotFound => ApplicationError::ToolUnavailable {
            program: invocation.program().to_string(),
        },
        io::ErrorKind::Interrupted => ApplicationError::Interrupted,
        _ => ApplicationError::OperationFailed {
            context: format!("run {}", invocation),
            source: Box::new(e),
        },
    }
}
