//! Shared test doubles

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use deployctl::domain::{ActionResult, Invocation};
use deployctl::infrastructure::traits::CommandRunner;

/// Records every invocation and replays scripted outcomes.
///
/// Once the script is exhausted every further call succeeds.
#[derive(Default)]
pub struct SpyCommandRunner {
    calls: Mutex<Vec<(Invocation, Option<PathBuf>)>>,
    outcomes: Mutex<VecDeque<io::Result<ActionResult>>>,
}

impl SpyCommandRunner {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn with_outcomes(outcomes: Vec<io::Result<ActionResult>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcomes: Mutex::new(outcomes.into()),
        }
    }

    pub fn exiting_with(code: i32) -> Self {
        Self::with_outcomes(vec![Ok(ActionResult::from_code(code))])
    }

    pub fn failing_with(kind: io::ErrorKind) -> Self {
        Self::with_outcomes(vec![Err(io::Error::from(kind))])
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(inv, _)| inv.clone())
            .collect()
    }

    pub fn cwds(&self) -> Vec<Option<PathBuf>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, cwd)| cwd.clone())
            .collect()
    }

    /// Invocations rendered as strings, for compact assertions.
    pub fn call_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for SpyCommandRunner {
    fn status(&self, invocation: &Invocation, cwd: Option<&Path>) -> io::Result<ActionResult> {
        self.calls
            .lock()
            .unwrap()
            .push((invocation.clone(), cwd.map(Path::to_path_buf)));
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(ActionResult::SUCCESS))
    }
}
