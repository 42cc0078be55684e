//! Definition document sources

pub mod file_loader;

pub use file_loader::*;
