//! Output service for what-if runs
//!
//! Nothing is touched on disk; every action is recorded so callers can inspect what a real
//! run would have done.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::core::error::Result;
use crate::generation::{Artifact, OutputService};

/// An action a real run would have performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputAction {
    Clean(PathBuf),
    Write(PathBuf),
}

/// Output service that records actions instead of performing them
#[derive(Debug, Default)]
pub struct DryRunOutputService {
    actions: Mutex<Vec<OutputAction>>,
}

impl DryRunOutputService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Actions recorded so far, in order
    pub fn actions(&self) -> Vec<OutputAction> {
        self.actions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn record(&self, action: OutputAction) {
        self.actions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(action);
    }
}

#[async_trait]
impl OutputService for DryRunOutputService {
    async fn clean_directory(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "What-if: directory left untouched");
        self.record(OutputAction::Clean(path.to_path_buf()));
        Ok(())
    }

    async fn write_artifact(&self, artifact: &Artifact) -> Result<()> {
        debug!(path = %artifact.path.display(), "What-if: file not written");
        self.record(OutputAction::Write(artifact.path.clone()));
        Ok(())
    }
}
