//! Shared building blocks: configuration, errors and identifier helpers.

pub mod config;
pub mod error;
pub mod utils;

pub use error::{Error, Result};
