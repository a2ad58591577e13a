//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated invariants of the data model.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("compose command is empty: configure at least the program name")]
    EmptyCommand,
}
