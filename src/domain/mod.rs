//! Domain layer: actions, invocations and results
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod invocation;

pub use entities::*;
pub use error::DomainError;
pub use invocation::build_invocation;
