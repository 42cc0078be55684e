//! Per-run definition cache
//!
//! Each entity kind's document is read, parsed and enriched the first time it is needed
//! and kept for the rest of the run. Enumerations are always enriched before the classes
//! or endpoints that consult them.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::definitions::{ClassDef, EndpointGroupDef};
use crate::generation::enrichment::{
    EnumCatalog, enrich_classes, enrich_endpoints, enrich_enums,
};
use crate::generation::{DefinitionSource, EntityKind};

/// Memoized, enriched definitions for one run
pub struct DefinitionCache {
    source: Arc<dyn DefinitionSource>,
    enums: Option<EnumCatalog>,
    classes: Option<Vec<ClassDef>>,
    endpoints: Option<Vec<EndpointGroupDef>>,
}

impl DefinitionCache {
    pub fn new(source: Arc<dyn DefinitionSource>) -> Self {
        Self {
            source,
            enums: None,
            classes: None,
            endpoints: None,
        }
    }

    /// Load and enrich whatever `kind` needs, if not already cached
    pub async fn populate(&mut self, kind: EntityKind) -> Result<()> {
        match kind {
            EntityKind::Enums | EntityKind::EnumConversionTests => {
                self.enums().await?;
            }
            EntityKind::Classes => {
                self.classes().await?;
            }
            EntityKind::Methods => {
                self.endpoints().await?;
            }
        }
        Ok(())
    }

    /// True when the definitions of `kind` have been loaded
    pub fn is_populated(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Enums | EntityKind::EnumConversionTests => self.enums.is_some(),
            EntityKind::Classes => self.classes.is_some(),
            EntityKind::Methods => self.endpoints.is_some(),
        }
    }

    /// Enriched enumerations
    pub async fn enums(&mut self) -> Result<&EnumCatalog> {
        let catalog = match self.enums.take() {
            Some(catalog) => catalog,
            None => {
                let raw = load_definitions(self.source.as_ref(), EntityKind::Enums).await?;
                enrich_enums(raw)
            }
        };
        Ok(self.enums.insert(catalog))
    }

    /// Enriched classes
    pub async fn classes(&mut self) -> Result<&[ClassDef]> {
        let classes = match self.classes.take() {
            Some(classes) => classes,
            None => {
                let source = Arc::clone(&self.source);
                let catalog = self.enums().await?;
                let raw = load_definitions(source.as_ref(), EntityKind::Classes).await?;
                enrich_classes(raw, catalog)
            }
        };
        Ok(self.classes.insert(classes).as_slice())
    }

    /// Enriched endpoint groups
    pub async fn endpoints(&mut self) -> Result<&[EndpointGroupDef]> {
        let endpoints = match self.endpoints.take() {
            Some(endpoints) => endpoints,
            None => {
                let source = Arc::clone(&self.source);
                let catalog = self.enums().await?;
                let raw = load_definitions(source.as_ref(), EntityKind::Methods).await?;
                enrich_endpoints(raw, catalog)
            }
        };
        Ok(self.endpoints.insert(endpoints).as_slice())
    }
}

async fn load_definitions<T: DeserializeOwned>(
    source: &dyn DefinitionSource,
    kind: EntityKind,
) -> Result<Vec<T>> {
    let document = source.read(kind).await?;
    debug!(kind = %kind, origin = %document.origin.display(), "Parsing definitions");

    serde_json::from_str(&document.content).map_err(|source| Error::MalformedDefinition {
        path: document.origin,
        source,
    })
}
