//! Error handling for the code generation pipeline.
//!
//! Every failure in the pipeline is fatal for the run, so this module defines a single
//! `Error` type (built with `thiserror`) plus a convenient `Result` alias. Variants carry the
//! path that was being read or written so the operator can see what went wrong.
//!
//! # Examples
//!
//! ```
//! use seapi_codegen::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("output directory is missing"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Result type for code generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for code generation operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error not tied to a specific definition or artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A definition document could not be read
    #[error("Failed to read definitions from {}: {source}", path.display())]
    DefinitionRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A definition document is not valid JSON for its entity kind
    #[error("Malformed definitions in {}: {source}", path.display())]
    MalformedDefinition {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A template file does not exist
    #[error("Template not found: {}", path.display())]
    TemplateNotFound { path: PathBuf },

    /// Template compilation or rendering error, including helper misuse
    #[error("Template engine error: {0}")]
    Template(#[from] tera::Error),

    /// No valid entity kind could be resolved from the selection argument
    #[error(
        "Please specify the entities to be generated via the `--entities` argument. \
         Valid values are {valid} (individually, or as a comma-delimited list)"
    )]
    NoEntitiesSelected { valid: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file is not valid TOML
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Writing or cleaning an output location failed
    #[error("Output error at {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new output error for the given path
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}
