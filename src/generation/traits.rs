//! Port interfaces for the generation domain

use std::path::Path;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::generation::{Artifact, DefinitionDocument, EntityKind};

/// Supplies the raw definition document of an entity kind
#[async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Read the document for `kind`
    async fn read(&self, kind: EntityKind) -> Result<DefinitionDocument>;
}

/// Destination for generated artifacts
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Remove everything inside `path`, creating it if needed
    async fn clean_directory(&self, path: &Path) -> Result<()>;

    /// Write one artifact
    async fn write_artifact(&self, artifact: &Artifact) -> Result<()>;
}
