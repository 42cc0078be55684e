//! File-based definition loader
//!
//! This loader handles only file I/O. Parsing and enrichment happen in the definition cache.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::generation::{DefinitionDocument, DefinitionSource, EntityKind};

/// Reads `<Kind>.json` documents from a directory
pub struct FileDefinitionSource {
    root: PathBuf,
}

impl FileDefinitionSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location of the document for `kind`
    pub fn path_for(&self, kind: EntityKind) -> PathBuf {
        self.root.join(format!("{kind}.json"))
    }
}

#[async_trait]
impl DefinitionSource for FileDefinitionSource {
    async fn read(&self, kind: EntityKind) -> Result<DefinitionDocument> {
        let path = self.path_for(kind);
        debug!(path = %path.display(), "Reading definitions");

        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| Error::DefinitionRead {
                path: path.clone(),
                source,
            })?;

        Ok(DefinitionDocument {
            origin: path,
            content,
        })
    }
}
