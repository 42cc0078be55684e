//! Shared fixtures for pipeline tests

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use seapi_codegen::core::config::{Config, ResolvedConfig};
use seapi_codegen::generation::{CodeGenOrchestrator, OutputService};
use seapi_codegen::infrastructure::FileDefinitionSource;
use tempfile::TempDir;

pub const ENUMS: &str = r#"[
  { "name": "BadgeRank", "values": [
    { "jsonName": "gold", "value": 1 },
    { "jsonName": "silver", "value": 2 } ] },
  { "name": "Order", "values": [ { "jsonName": "desc" }, { "jsonName": "asc" } ] }
]"#;

pub const CLASSES: &str = r#"[
  { "name": "Badge", "description": "A badge.", "properties": [
    { "jsonName": "badge_id", "type": "int?" },
    { "jsonName": "rank", "type": "BadgeRank" } ] },
  { "name": "Wrapper<T>", "suffix": "", "properties": [
    { "jsonName": "items", "type": "List<T>" } ] }
]"#;

pub const METHODS: &str = r#"[
  { "name": "Badges", "methods": [
    { "name": "GetAll", "path": "/badges", "returnType": "Wrapper<Badge>",
      "isPaged": true, "sort": "BadgeRank" },
    { "name": "GetByIds", "path": "/badges/{ids}", "returnType": "Wrapper<Badge>",
      "paths": [ { "name": "ids", "type": "IEnumerable<int>" } ] } ] },
  { "name": "Inbox", "methods": [
    { "name": "GetUnread", "path": "/inbox", "returnType": "Wrapper<Item>",
      "isNetworkMethod": true, "scopes": ["read_inbox"] } ] }
]"#;

/// A throwaway project with definitions and the bundled templates
pub struct Project {
    pub dir: TempDir,
    pub config: ResolvedConfig,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let sets = dir.path().join("codegen/data/sets");
        fs::create_dir_all(&sets).unwrap();
        fs::write(sets.join("Enums.json"), ENUMS).unwrap();
        fs::write(sets.join("Classes.json"), CLASSES).unwrap();
        fs::write(sets.join("Methods.json"), METHODS).unwrap();

        let mut config = Config::default();
        config.templates_dir = bundled_templates();
        let config = config.resolve(dir.path());

        Self { dir, config }
    }

    pub fn orchestrator(&self, output: Arc<dyn OutputService>) -> CodeGenOrchestrator {
        let source = Arc::new(FileDefinitionSource::new(self.config.definitions_dir.clone()));
        CodeGenOrchestrator::new(self.config.clone(), source, output)
    }

    pub fn main_dir(&self, kind: &str) -> PathBuf {
        self.config.main_output_root.join(kind)
    }

    pub fn test_dir(&self, kind: &str) -> PathBuf {
        self.config.test_output_root.join(kind)
    }
}

pub fn bundled_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("codegen/data/templates")
}

/// Sorted file names directly inside `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
