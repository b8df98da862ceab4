use std::path::{Path, PathBuf};

use super::RunError;

/// Lifecycle of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Completed,
    Aborted,
}

/// A file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenUnit {
    pub tool: String,
    pub unit: String,
    pub path: PathBuf,
}

/// Outcome of [`Orchestrator::run`](super::Orchestrator::run).
///
/// An aborted run still lists the files it wrote before the failure. With
/// [`WritePolicy::Staged`](super::WritePolicy::Staged) that only happens when
/// renaming a staged file into place fails after earlier renames succeeded.
#[derive(Debug, Default)]
pub struct RunReport {
    state: RunState,
    written: Vec<WrittenUnit>,
    error: Option<RunError>,
}

impl RunReport {
    pub(crate) fn start() -> Self {
        Self {
            state: RunState::Running,
            ..Self::default()
        }
    }

    pub(crate) fn record(&mut self, tool: &str, unit: &str, path: &Path) {
        self.written.push(WrittenUnit {
            tool: tool.to_string(),
            unit: unit.to_string(),
            path: path.to_path_buf(),
        });
    }

    pub(crate) fn complete(mut self) -> Self {
        self.state = RunState::Completed;
        self
    }

    pub(crate) fn abort(mut self, error: RunError) -> Self {
        self.state = RunState::Aborted;
        self.error = Some(error);
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn written(&self) -> &[WrittenUnit] {
        &self.written
    }

    pub fn error(&self) -> Option<&RunError> {
        self.error.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.state == RunState::Completed
    }

    /// The written files, or the error that aborted the run.
    pub fn into_result(self) -> Result<Vec<WrittenUnit>, RunError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.written),
        }
    }
}
