//! Loader module
//!
//! Read collections and settings from files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_collection` - a JSON array as a collection of `serde_json::Value`
//! - `load_settings` - paginator and control options from YAML or JSON
//!
//! A collection file that holds valid JSON but not an array is not an
//! error: it becomes an empty collection and a diagnostic is emitted.

mod parser;
mod types;

pub use parser::{
    collection_from_str, collection_from_value, load_collection, load_settings,
    settings_from_str, SettingsFormat,
};
pub use types::Settings;
