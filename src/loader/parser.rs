//! Collection and settings parsing

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::{Error, Result};
use crate::loader::types::Settings;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Syntax of a settings document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    /// Pick a format from a file extension; anything but `.json` is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Load a collection from a JSON file
pub fn load_collection(path: impl AsRef<Path>, sink: &dyn DiagnosticSink) -> Result<Vec<Value>> {
    let content = read_file(path.as_ref())?;
    collection_from_str(&content, sink)
}

/// Parse a collection from a JSON string
pub fn collection_from_str(json: &str, sink: &dyn DiagnosticSink) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(json)?;
    Ok(collection_from_value(value, sink))
}

/// Use a JSON array as a collection
///
/// Any other value yields an empty collection and a
/// [`Diagnostic::MalformedCollection`].
pub fn collection_from_value(value: Value, sink: &dyn DiagnosticSink) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => {
            sink.emit(&Diagnostic::MalformedCollection {
                found: json_type_name(&other).to_string(),
            });
            Vec::new()
        }
    }
}

/// Load settings, choosing the syntax from the file extension
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings> {
    let path = path.as_ref();
    let content = read_file(path)?;
    settings_from_str(&content, SettingsFormat::from_path(path))
}

/// Parse settings from a string
pub fn settings_from_str(content: &str, format: SettingsFormat) -> Result<Settings> {
    let settings = match format {
        SettingsFormat::Json => serde_json::from_str(content)?,
        SettingsFormat::Yaml if content.trim().is_empty() => Settings::default(),
        SettingsFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(settings)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::file_not_found(path.display().to_string())
        } else {
            Error::config(format!("Failed to read '{}': {}", path.display(), e))
        }
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
