//! Filesystem-based output service implementation

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::generation::{Artifact, OutputService};

/// Output service that writes artifacts to the filesystem
pub struct FileSystemOutputService;

impl FileSystemOutputService {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemOutputService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputService for FileSystemOutputService {
    async fn clean_directory(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| Error::output(path, e))?;

        let mut entries = fs::read_dir(path).await.map_err(|e| Error::output(path, e))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| Error::output(path, e))?
        {
            let entry_path = entry.path();
            let file_type = entry
                .file_type()
                .await
                .map_err(|e| Error::output(&entry_path, e))?;

            debug!(path = %entry_path.display(), "Removing");
            let removed = if file_type.is_dir() {
                fs::remove_dir_all(&entry_path).await
            } else {
                fs::remove_file(&entry_path).await
            };
            removed.map_err(|e| Error::output(&entry_path, e))?;
        }

        Ok(())
    }

    async fn write_artifact(&self, artifact: &Artifact) -> Result<()> {
        let path = &artifact.path;

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::output(parent, e))?;
        }

        let mut file = fs::File::create(path)
            .await
            .map_err(|e| Error::output(path, e))?;
        file.write_all(artifact.content.as_bytes())
            .await
            .map_err(|e| Error::output(path, e))?;
        file.flush().await.map_err(|e| Error::output(path, e))?;

        Ok(())
    }
}
