//! File-based options discovery for CLI use
//!
//! Handles finding and loading resolver options from the filesystem. The
//! descriptor itself is never read from disk; only [`ResolveOptions`] is.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::resolve::ResolveOptions;

/// File-based options discovery
///
/// Searches for alder configuration in conventional locations. This is
/// primarily for CLI use - library users construct [`ResolveOptions`]
/// directly.
///
/// # Example
///
/// ```no_run
/// use alder_config::OptionsDiscovery;
///
/// let options = OptionsDiscovery::new(".").load_or_default().unwrap();
/// ```
pub struct OptionsDiscovery {
    root: PathBuf,
}

impl OptionsDiscovery {
    /// Create a new options discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: alder.toml
    /// 2. package.json (alder field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("alder.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        // package.json with alder field
        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("alder").is_some() && !parsed["alder"].is_null() {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load options from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ResolveOptions> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        self.load_from(&path)
    }

    /// Load options, falling back to defaults when no config file exists
    pub fn load_or_default(&self) -> Result<ResolveOptions> {
        match self.load() {
            Ok(options) => Ok(options),
            Err(ConfigError::NotFound) => Ok(ResolveOptions::default()),
            Err(err) => Err(err),
        }
    }

    fn load_from(&self, path: &Path) -> Result<ResolveOptions> {
        tracing::debug!("loading options from {}", path.display());

        // Handle package.json specially
        if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            return self.load_from_package_json(path);
        }

        let content = fs::read_to_string(path)?;

        let parsed: TomlOptions =
            toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "alder.toml".to_string(),
                hint: Some(format!("Invalid TOML syntax: {}", e)),
            })?;

        Ok(parsed.build)
    }

    fn load_from_package_json(&self, path: &Path) -> Result<ResolveOptions> {
        let content = fs::read_to_string(path)?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                field: "package.json".to_string(),
                hint: Some(format!("Invalid JSON: {}", e)),
            })?;

        let alder_value = parsed
            .get("alder")
            .filter(|v| !v.is_null())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "alder".to_string(),
                hint: Some("Add an 'alder' field to your package.json".to_string()),
            })?;

        serde_json::from_value(alder_value.clone()).map_err(|e| ConfigError::InvalidValue {
            field: "alder".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

/// `alder.toml` layout: options live under a `[build]` table
#[derive(Debug, Default, serde::Deserialize)]
struct TomlOptions {
    #[serde(default)]
    build: ResolveOptions,
}
