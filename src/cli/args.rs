//! CLI argument definitions using clap

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use clap_complete::Shell;

use crate::cli::CliResult;
use crate::config::Overrides;
use crate::domain::Action;

const EXAMPLES: &str = "\
Examples:
  deployctl up                  Start all services (detached)
  deployctl up --no-detach      Start all services in the foreground
  deployctl down                Stop and remove all services
  deployctl down -v             ...and remove named volumes
  deployctl restart             Restart all services
  deployctl status              Show service status
  deployctl logs                Show all logs
  deployctl logs backend        Show backend logs
  deployctl logs -f             Follow logs
  deployctl -f prod.yml up      Use another compose file";

/// Manage the docker compose lifecycle of the backend services
#[derive(Parser, Debug)]
#[command(name = "deployctl")]
#[command(author, version, about, long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Compose file (default: docker-compose.yml)
    #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Project directory (default: cwd)
    #[arg(short = 'C', long, value_hint = ValueHint::DirPath)]
    pub project_dir: Option<PathBuf>,

    /// Print the commands instead of running them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start all services
    Up {
        /// Run in the foreground instead of detached
        #[arg(long)]
        no_detach: bool,
    },

    /// Stop and remove all services
    Down {
        /// Also remove named volumes
        #[arg(short, long)]
        volumes: bool,
    },

    /// Restart all services
    Restart,

    /// Show service status
    Status,

    /// Show logs from services
    Logs {
        /// Follow log output
        #[arg(short, long)]
        follow: bool,
        /// Only show logs of this service
        service: Option<String>,
    },
}

impl Commands {
    pub fn action(&self) -> Action {
        match self {
            Commands::Up { no_detach } => Action::Up {
                detach: !no_detach,
            },
            Commands::Down { volumes } => Action::Down { volumes: *volumes },
            Commands::Restart => Action::Restart,
            Commands::Status => Action::Status,
            Commands::Logs { follow, service } => Action::Logs {
                follow: *follow,
                service: service.clone(),
            },
        }
    }
}

impl Cli {
    /// Command-line values that override the config files.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            compose_file: self.file.clone(),
            project_dir: self.project_dir.clone(),
        }
    }
}

/// Parse and validate the command line.
///
/// An action is required unless only completions are requested, and
/// `--generate` never combines with an action. Nothing is spawned here;
/// failures carry clap's usage text.
pub fn parse_arguments<I, T>(args: I) -> CliResult<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    match (&cli.command, &cli.generator) {
        (None, None) => Err(Cli::command()
            .error(
                ErrorKind::MissingSubcommand,
                "an action is required: up, down, restart, status or logs",
            )
            .into()),
        (Some(_), Some(_)) => Err(Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--generate cannot be combined with an action",
            )
            .into()),
        _ => Ok(cli),
    }
}
