//! deployctl: a thin lifecycle wrapper around docker compose
//!
//! Each action maps to one invocation of the orchestration tool:
//! - `domain`: actions, invocations, and the pure action-to-tokens mapping
//! - `application`: the deploy service and its error taxonomy
//! - `infrastructure`: process spawning, Ctrl-C handling, wiring
//! - `cli`: argument grammar, dispatch, exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
