//! Infrastructure layer - concrete implementations of domain ports

pub mod definitions;
pub mod generation;
pub mod output;

pub use definitions::FileDefinitionSource;
pub use output::{DryRunOutputService, FileSystemOutputService, OutputAction};
