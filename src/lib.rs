//! Code generator for a Stack Exchange API client
//!
//! Reads JSON definitions of enumerations, model classes and endpoint groups, enriches them
//! and renders them through Tera templates into C# source files.
#![deny(unsafe_code)]

pub mod core;
pub mod definitions;
pub mod generation;
pub mod infrastructure;

pub use crate::core::{Error, Result};
