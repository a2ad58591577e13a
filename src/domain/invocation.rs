//! Mapping from an action to the orchestration tool's command line.
//!
//! | action  | tokens after `<tool> -f <file>`     |
//! |---------|-------------------------------------|
//! | up      | `up` + `-d` when detached           |
//! | down    | `down` + `-v` when removing volumes |
//! | restart | `restart`                           |
//! | status  | `ps`                                |
//! | logs    | `logs` + `-f` when following + service |

use crate::domain::{Action, ComposeProject, Invocation};

/// Build the invocation for `action` against `project`.
///
/// Pure: the same inputs always yield the same tokens.
pub fn build_invocation(project: &ComposeProject, action: &Action) -> Invocation {
    let base = project
        .command()
        .clone()
        .arg("-f")
        .arg(project.file().to_string_lossy());

    match action {
        Action::Up { detach } => {
            let inv = base.arg("up");
            if *detach {
                inv.arg("-d")
            } else {
                inv
            }
        }
        Action::Down { volumes } => {
            let inv = base.arg("down");
            if *volumes {
                inv.arg("-v")
            } else {
                inv
            }
        }
        Action::Restart => base.arg("restart"),
        Action::Status => base.arg("ps"),
        Action::Logs { follow, service } => {
            let mut inv = base.arg("logs");
            if *follow {
                inv = inv.arg("-f");
            }
            match service {
                Some(name) => inv.arg(name.as_str()),
                None => inv,
            }
        }
    }
}
