//! Configuration model for licsync.
//!
//! This module defines the Config struct that represents `licsync.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, validation of config values, and
//! resolution into the settings each task runs with.

pub mod header;
mod model;
mod operations;
mod settings;
pub mod types;


// Re-export public API
pub use header::HeaderSettings;
pub use model::Config;
pub use settings::{InstanceSettings, TemplateSettings};
