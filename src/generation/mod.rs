//! Generation domain module - loads definitions and turns them into source files
//!
//! Definitions are read through a [`DefinitionSource`], enriched once per run by the
//! [`DefinitionCache`] and rendered by the [`CodeGenOrchestrator`], which hands every
//! artifact to an [`OutputService`].

pub mod cache;
pub mod enrichment;
pub mod entities;
pub mod orchestrator;
pub mod traits;
pub mod types;

pub use cache::DefinitionCache;
pub use entities::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
