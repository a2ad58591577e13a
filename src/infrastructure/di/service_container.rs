//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::DeployService;
use crate::application::ApplicationResult;
use crate::config::Settings;
use crate::infrastructure::traits::{CommandRunner, DryRunCommandRunner, RealCommandRunner};

/// Container holding the settings and the I/O seams services are built from.
pub struct ServiceContainer {
    /// Application settings, built once per run
    pub settings: Arc<Settings>,

    /// Command runner abstraction
    pub cmd: Arc<dyn CommandRunner>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealCommandRunner))
    }

    /// Container whose runner only prints what it would execute.
    pub fn dry_run(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(DryRunCommandRunner))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, cmd: Arc<dyn CommandRunner>) -> Self {
        let settings = Arc::new(settings);

        Self { settings, cmd }
    }

    /// Build the deploy service.
    ///
    /// Fails when the configured compose command is empty.
    pub fn deploy_service(&self) -> ApplicationResult<DeployService> {
        DeployService::new(Arc::clone(&self.cmd), Arc::clone(&self.settings))
    }
}
