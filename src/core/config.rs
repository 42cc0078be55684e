//! Configuration for a code generation run.
//!
//! A run is configured from an optional TOML file and the command line. Relative paths
//! in the file are resolved against the project root given on the command line.
//!
//! ```toml
//! definitions_dir = "codegen/data/sets"
//! templates_dir = "codegen/data/templates"
//! main_project_dir = "generated/SEStandard"
//! test_project_dir = "generated/SEStandard.Tests"
//! codegen_folder = "CodeGen"
//! template_extension = "tera"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::error::{Error, Result};

/// File layout settings, as read from a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding one `<Kind>.json` definition set per entity kind
    pub definitions_dir: PathBuf,
    /// Directory holding one template per entity kind plus the endpoint index template
    pub templates_dir: PathBuf,
    /// Project receiving generated enums, classes and endpoints
    pub main_project_dir: PathBuf,
    /// Project receiving generated enum conversion tests
    pub test_project_dir: PathBuf,
    /// Folder created inside each project to hold generated output
    pub codegen_folder: String,
    /// Extension of template files, without the dot
    pub template_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            definitions_dir: PathBuf::from("codegen/data/sets"),
            templates_dir: PathBuf::from("codegen/data/templates"),
            main_project_dir: PathBuf::from("generated/SEStandard"),
            test_project_dir: PathBuf::from("generated/SEStandard.Tests"),
            codegen_folder: "CodeGen".to_string(),
            template_extension: "tera".to_string(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, or the defaults when no file is given
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                debug!(path = %path.display(), "Reading configuration");
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    Error::config(format!("Failed to read {}: {e}", path.display()))
                })?;
                Self::from_toml_str(&content)
            }
            None => Ok(Self::default()),
        }
    }

    /// Resolve every directory against `project_root`
    pub fn resolve(&self, project_root: &Path) -> ResolvedConfig {
        let join = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                project_root.join(p)
            }
        };

        ResolvedConfig {
            definitions_dir: join(&self.definitions_dir),
            templates_dir: join(&self.templates_dir),
            main_output_root: join(&self.main_project_dir).join(&self.codegen_folder),
            test_output_root: join(&self.test_project_dir).join(&self.codegen_folder),
            template_extension: self.template_extension.clone(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.codegen_folder.trim().is_empty() {
            return Err(Error::config("codegen_folder cannot be empty"));
        }
        if self.template_extension.trim().is_empty() || self.template_extension.starts_with('.') {
            return Err(Error::config(
                "template_extension must be a non-empty extension without a leading dot",
            ));
        }
        Ok(())
    }
}

/// Absolute locations used by a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub definitions_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub main_output_root: PathBuf,
    pub test_output_root: PathBuf,
    pub template_extension: String,
}

impl ResolvedConfig {
    /// Path of a template file by stem
    pub fn template_path(&self, stem: &str) -> PathBuf {
        self.templates_dir
            .join(format!("{stem}.{}", self.template_extension))
    }
}
