//! Core types for the generation domain

use std::path::{Path, PathBuf};

use crate::generation::EntityKind;

/// Extension of every generated source file
pub const SOURCE_EXTENSION: &str = "cs";

/// A definition document read for one entity kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionDocument {
    /// Where the document came from, reported on parse failures
    pub origin: PathBuf,
    pub content: String,
}

/// Generated artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Files produced by a generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    written: Vec<(EntityKind, PathBuf)>,
}

impl GenerationReport {
    pub(crate) fn record(&mut self, kind: EntityKind, path: &Path) {
        self.written.push((kind, path.to_path_buf()));
    }

    /// Artifact paths produced for one kind
    pub fn paths_for(&self, kind: EntityKind) -> Vec<&Path> {
        self.written
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, p)| p.as_path())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.written.len()
    }

    pub fn is_empty(&self) -> bool {
        self.written.is_empty()
    }
}
