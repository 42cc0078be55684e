//! Tera-based template renderer implementation
//!
//! Generated files are source code, so escaping is disabled for every template: `<`, `>`,
//! `&` and quotes pass through unchanged.

use std::io;
use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};
use tokio::fs;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::infrastructure::generation::helpers::register_helpers;

/// Key under which aggregate templates receive their collection
pub const ITEMS_KEY: &str = "items";

/// Tera-based template renderer
pub struct TeraTemplateRenderer {
    tera: Tera,
}

impl TeraTemplateRenderer {
    /// Create a renderer with escaping disabled and the custom helpers registered
    pub fn new() -> Self {
        let mut tera = Tera::default();
        tera.autoescape_on(Vec::new());
        register_helpers(&mut tera);
        Self { tera }
    }

    /// Compile the template at `path` under `name`
    pub async fn load_template(&mut self, name: &str, path: &Path) -> Result<()> {
        debug!(name = %name, path = %path.display(), "Compiling template");

        let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::TemplateNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        self.add_template(name, &content)
    }

    /// Compile template text under `name`
    pub fn add_template(&mut self, name: &str, content: &str) -> Result<()> {
        self.tera.add_raw_template(name, content)?;
        Ok(())
    }

    /// Render one item; its fields become the top-level template variables
    pub fn render_item<T: Serialize>(&self, name: &str, item: &T) -> Result<String> {
        let context = Context::from_serialize(item)?;
        Ok(self.tera.render(name, &context)?)
    }

    /// Render a whole collection, exposed to the template as `items`
    pub fn render_collection<T: Serialize>(&self, name: &str, items: &[T]) -> Result<String> {
        let mut context = Context::new();
        context.insert(ITEMS_KEY, items);
        Ok(self.tera.render(name, &context)?)
    }
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
