//! Core build descriptor types shared across alder crates.

mod helpers;
mod html;
mod plugin;
mod transform;
mod types;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

pub use html::HtmlOptions;
pub use plugin::PluginConfig;
pub use transform::{ElmOptions, Loader, ScriptOptions, TransformRule};
pub use types::Mode;

use helpers::default_bundle_filename;

/// Complete build descriptor handed to the bundling engine.
///
/// Immutable once resolved: the engine only reads it. Construct via
/// [`crate::resolve`] or deserialize a previously serialized descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildDescriptor {
    /// Build mode
    #[serde(default)]
    pub mode: Mode,

    /// Entry source file the module graph is rooted at
    pub entry: PathBuf,

    /// Where the emitted bundle goes
    pub output: OutputOptions,

    /// Per-extension transform rules
    #[serde(default)]
    pub rules: Vec<TransformRule>,

    /// Configured plugins, run in order
    #[serde(default)]
    pub plugins: Vec<PluginConfig>,

    /// Development server settings
    pub dev_server: crate::dev::DevServerConfig,
}

/// Destination for the generated bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory
    pub dir: PathBuf,

    /// Bundle filename within the output directory (default: "bundle.js")
    #[serde(default = "default_bundle_filename")]
    pub filename: String,
}

impl BuildDescriptor {
    /// Create from serde_json::Value (for programmatic use from an API)
    pub fn from_value(value: Value) -> Result<Self, crate::error::ConfigError> {
        serde_json::from_value(value).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> Result<Value, crate::error::ConfigError> {
        serde_json::to_value(self).map_err(|e| crate::error::ConfigError::InvalidValue {
            field: "descriptor".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Absolute path of the emitted bundle
    pub fn bundle_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{resolve, ResolveOptions};
    use serde_json::json;

    #[test]
    fn to_value_serializes_descriptor() {
        let descriptor = resolve("/proj", &ResolveOptions::default());
        let value = descriptor.to_value().unwrap();
        assert_eq!(value["mode"], json!("development"));
        assert_eq!(value["output"]["filename"], json!("bundle.js"));
        assert_eq!(value["dev_server"]["port"], json!(8000));
    }

    #[test]
    fn from_value_round_trips_resolver_output() {
        let descriptor = resolve("/proj", &ResolveOptions { production: true });
        let value = descriptor.to_value().unwrap();
        let parsed = BuildDescriptor::from_value(value).unwrap();
        assert_eq!(parsed, descriptor);
    }

    #[test]
    fn bundle_path_joins_dir_and_filename() {
        let descriptor = resolve("/proj", &ResolveOptions::default());
        assert_eq!(descriptor.bundle_path(), PathBuf::from("/proj/public/bundle.js"));
    }
}
