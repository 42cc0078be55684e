//! Template rendering

pub mod helpers;
pub mod template_renderer;

pub use template_renderer::*;
