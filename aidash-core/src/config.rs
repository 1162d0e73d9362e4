//! Provider configuration access.
//!
//! The provider configuration is an untyped nested mapping. Top-level keys are
//! provider types (`openai`, `deepl`, ...) holding a settings object, plus an
//! optional `services` key grouping provider types for display:
//!
//! ```toml
//! [services]
//! llm = ["openai", "deepseek"]
//! translation = ["deepl"]
//!
//! [openai]
//! endpoint = "https://api.openai.com/v1"
//! apikey = "sk-..."
//! ```
//!
//! Configuration is read fresh on every call so edits show up on the next
//! dashboard render without a restart.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::Result;

/// Top-level key holding the group layout.
pub const SERVICES_KEY: &str = "services";

/// Source of the raw provider configuration.
///
/// Any value that is not a JSON object is treated as "no configuration".
pub trait ConfigSource: Send + Sync {
    /// Returns the current configuration.
    fn get(&self) -> Value;
}

/// A fixed, in-memory configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigSource {
    value: Value,
}

impl StaticConfigSource {
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl ConfigSource for StaticConfigSource {
    fn get(&self) -> Value {
        self.value.clone()
    }
}

/// Configuration backed by a TOML or JSON file, re-read on every access.
#[derive(Debug, Clone)]
pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file, surfacing any failure.
    pub fn load(&self) -> Result<Value> {
        let contents = std::fs::read_to_string(&self.path)?;
        parse_config(&self.path, &contents)
    }
}

impl ConfigSource for FileConfigSource {
    fn get(&self) -> Value {
        match self.load() {
            Ok(value) => {
                debug!(path = %self.path.display(), "loaded provider configuration");
                value
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to load provider configuration");
                Value::Null
            }
        }
    }
}

/// Parse configuration text, choosing the format from the file extension.
///
/// `.json` files are parsed as JSON; everything else as TOML.
pub fn parse_config(path: &Path, contents: &str) -> Result<Value> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        return Ok(serde_json::from_str(contents)?);
    }

    let table: toml::Table = toml::from_str(contents)?;
    Ok(serde_json::to_value(table)?)
}

/// Look up the settings object for a provider type.
///
/// Returns `None` when the configuration is not a mapping, the key is absent,
/// or its value is not itself a mapping.
pub fn provider_settings<'a>(config: &'a Value, service_type: &str) -> Option<&'a Map<String, Value>> {
    config.as_object()?.get(service_type)?.as_object()
}
