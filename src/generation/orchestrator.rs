//! Generation orchestration - coordinates the Prepare, Clean and Generate stages
//!
//! Each stage consumes the previous one, so a run moves strictly forward:
//!
//! ```text
//! CodeGenOrchestrator::prepare -> Prepared::clean -> Cleaned::generate -> GenerationReport
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::core::config::ResolvedConfig;
use crate::core::error::Result;
use crate::core::utils::sanitize_file_stem;
use crate::generation::{
    Artifact, DefinitionCache, DefinitionSource, EntityKind, GenerationReport, OutputService,
    SOURCE_EXTENSION, dependency_closure, join_kinds, parse_selection,
};
use crate::infrastructure::generation::TeraTemplateRenderer;

/// Appended to an endpoint group's name to form its file name
pub const ENDPOINT_SUFFIX: &str = "Endpoint";

/// Template rendering the index of every endpoint group
pub const ENDPOINT_INDEX_TEMPLATE: &str = "InitializeEndpoints";

/// File produced by the endpoint index template
pub const ENDPOINT_INDEX_FILE: &str = "StackExchangeClient.InitializeEndpoints.cs";

/// Coordinates a code generation run
pub struct CodeGenOrchestrator {
    config: ResolvedConfig,
    source: Arc<dyn DefinitionSource>,
    output: Arc<dyn OutputService>,
}

impl CodeGenOrchestrator {
    pub fn new(
        config: ResolvedConfig,
        source: Arc<dyn DefinitionSource>,
        output: Arc<dyn OutputService>,
    ) -> Self {
        Self {
            config,
            source,
            output,
        }
    }

    /// Run every stage for the given entity selection
    pub async fn run(&self, selection: &str) -> Result<GenerationReport> {
        self.prepare(selection)?.clean().await?.generate().await
    }

    /// Prepare stage: resolve the selection and output locations and configure the renderer
    pub fn prepare(&self, selection: &str) -> Result<Prepared<'_>> {
        let selected = parse_selection(selection)?;

        let outputs = selected
            .into_iter()
            .map(|kind| (kind, self.output_dir(kind)))
            .collect();

        Ok(Prepared {
            orchestrator: self,
            outputs,
            renderer: TeraTemplateRenderer::new(),
        })
    }

    /// Directory receiving the artifacts of `kind`
    pub fn output_dir(&self, kind: EntityKind) -> PathBuf {
        let root = match kind {
            EntityKind::EnumConversionTests => &self.config.test_output_root,
            EntityKind::Enums | EntityKind::Classes | EntityKind::Methods => {
                &self.config.main_output_root
            }
        };
        root.join(kind.as_str())
    }
}

/// A run whose selection and output locations are resolved
pub struct Prepared<'a> {
    orchestrator: &'a CodeGenOrchestrator,
    outputs: BTreeMap<EntityKind, PathBuf>,
    renderer: TeraTemplateRenderer,
}

impl<'a> Prepared<'a> {
    /// Requested kinds and their output directories
    pub fn outputs(&self) -> &BTreeMap<EntityKind, PathBuf> {
        &self.outputs
    }

    /// Clean stage: empty every output directory
    pub async fn clean(self) -> Result<Cleaned<'a>> {
        for path in self.outputs.values() {
            info!("Cleaning directory: {}", path.display());
            self.orchestrator.output.clean_directory(path).await?;
        }

        Ok(Cleaned {
            orchestrator: self.orchestrator,
            outputs: self.outputs,
            renderer: self.renderer,
        })
    }
}

/// A run whose output directories are clean
pub struct Cleaned<'a> {
    orchestrator: &'a CodeGenOrchestrator,
    outputs: BTreeMap<EntityKind, PathBuf>,
    renderer: TeraTemplateRenderer,
}

impl Cleaned<'_> {
    /// Generate stage: load the needed definitions and render every requested kind
    pub async fn generate(mut self) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();
        if self.outputs.is_empty() {
            return Ok(report);
        }

        info!("Generating caches...");
        let mut cache = DefinitionCache::new(Arc::clone(&self.orchestrator.source));
        let needed = dependency_closure(self.outputs.keys().copied());
        info!("Caches will be generated for: {}", join_kinds(needed.iter().copied()));
        for kind in needed {
            info!("Generating caches for: {kind}");
            cache.populate(kind).await?;
        }

        info!("Generating files...");
        let outputs = std::mem::take(&mut self.outputs);
        for (kind, dir) in &outputs {
            info!("Generating: {kind}");
            self.load_template(kind.as_str()).await?;

            match kind {
                EntityKind::Enums => {
                    let catalog = cache.enums().await?;
                    for def in catalog.enums() {
                        self.emit_item(&mut report, *kind, dir, &def.name, def).await?;
                    }
                }
                EntityKind::Classes => {
                    for class in cache.classes().await? {
                        self.emit_item(&mut report, *kind, dir, &class.name, class)
                            .await?;
                    }
                }
                EntityKind::Methods => {
                    let groups = cache.endpoints().await?;
                    for group in groups {
                        let stem = format!("{}{ENDPOINT_SUFFIX}", group.name);
                        self.emit_item(&mut report, *kind, dir, &stem, group).await?;
                    }

                    self.load_template(ENDPOINT_INDEX_TEMPLATE).await?;
                    let text = self
                        .renderer
                        .render_collection(ENDPOINT_INDEX_TEMPLATE, groups)?;
                    self.emit(&mut report, *kind, Artifact::new(dir.join(ENDPOINT_INDEX_FILE), text))
                        .await?;
                }
                EntityKind::EnumConversionTests => {
                    let catalog = cache.enums().await?;
                    let text = self
                        .renderer
                        .render_collection(kind.as_str(), catalog.enums())?;
                    let path = dir.join(format!("{kind}.{SOURCE_EXTENSION}"));
                    self.emit(&mut report, *kind, Artifact::new(path, text))
                        .await?;
                }
            }
        }

        info!(files = report.len(), "Generation complete");
        Ok(report)
    }

    async fn load_template(&mut self, name: &str) -> Result<()> {
        let path = self.orchestrator.config.template_path(name);
        self.renderer.load_template(name, &path).await
    }

    async fn emit_item<T: Serialize>(
        &self,
        report: &mut GenerationReport,
        kind: EntityKind,
        dir: &Path,
        identifier: &str,
        item: &T,
    ) -> Result<()> {
        let text = self.renderer.render_item(kind.as_str(), item)?;
        let file_name = format!("{}.{SOURCE_EXTENSION}", sanitize_file_stem(identifier));
        self.emit(report, kind, Artifact::new(dir.join(file_name), text))
            .await
    }

    async fn emit(
        &self,
        report: &mut GenerationReport,
        kind: EntityKind,
        artifact: Artifact,
    ) -> Result<()> {
        info!("Writing: {}", artifact.path.display());
        self.orchestrator.output.write_artifact(&artifact).await?;
        report.record(kind, &artifact.path);
        Ok(())
    }
}
