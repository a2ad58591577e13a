//! Command dispatch: one function per action
//!
//! `up` and `restart` are followed by a status listing once they succeed.

use colored::Colorize;
use tracing::{debug, instrument, warn};

use crate::application::services::DeployService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands};
use crate::cli::{output, CliError, CliResult};
use crate::config::{Endpoint, Settings};
use crate::domain::Action;
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;

/// Load settings and wire the container for this run.
pub fn build_container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = Settings::load(&cli.overrides())?;
    if cli.dry_run {
        Ok(ServiceContainer::dry_run(settings))
    } else {
        Ok(ServiceContainer::new(settings))
    }
}

pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };
    if let Ok(toml) = container.settings.to_toml() {
        debug!("effective config:\n{}", toml);
    }

    let service = container.deploy_service()?;
    match command {
        Commands::Up { .. } | Commands::Restart => {
            _start(&service, &command.action(), &container.settings.endpoints)
        }
        Commands::Down { .. } => _down(&service, &command.action()),
        Commands::Status => _status(&service),
        Commands::Logs { .. } => _logs(&service, &command.action()),
    }
}

/// Report the outcome on stderr and turn it into the process exit code.
pub fn finish(result: CliResult<()>) -> i32 {
    match result {
        Ok(()) => exitcode::OK,
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    }
}

fn report(err: &CliError) {
    match err {
        CliError::Usage(e) => {
            // clap renders its own usage text (stdout for --help)
            let _ = e.print();
        }
        CliError::Application(ApplicationError::Interrupted) => {
            eprintln!("\n{}", "Operation cancelled by user.".yellow());
        }
        other => output::error(other),
    }
}

#[instrument(skip(service, endpoints))]
fn _start(service: &DeployService, action: &Action, endpoints: &[Endpoint]) -> CliResult<()> {
    let (before, after) = match action {
        Action::Restart => ("Restarting services...", "Services restarted successfully."),
        _ => ("Starting services...", "Services started successfully."),
    };
    output::info(before);
    service.execute(action)?;
    output::success(after);

    if !endpoints.is_empty() {
        output::info("\nAccess URLs:");
        for endpoint in endpoints {
            output::detail(&format!("- {}: {}", endpoint.name, endpoint.url));
        }
    }

    if action.shows_status_after() {
        _status_after(service)?;
    }
    Ok(())
}

#[instrument(skip(service))]
fn _down(service: &DeployService, action: &Action) -> CliResult<()> {
    output::info("Stopping services...");
    service.execute(action)?;
    output::success("Services stopped successfully.");
    Ok(())
}

#[instrument(skip(service))]
fn _status(service: &DeployService) -> CliResult<()> {
    output::header("Service Status:");
    service.execute(&Action::Status)?;
    Ok(())
}

/// Status listing after a successful start; a non-zero `ps` only warns.
fn _status_after(service: &DeployService) -> CliResult<()> {
    output::header("Service Status:");
    let result = service.run(&Action::Status)?;
    if !result.success() {
        warn!("status listing exited with {}", result.exit_code());
        output::warning(&format!(
            "status listing failed with exit code {}",
            result.exit_code()
        ));
    }
    Ok(())
}

#[instrument(skip(service))]
fn _logs(service: &DeployService, action: &Action) -> CliResult<()> {
    service.execute(action)?;
    Ok(())
}
