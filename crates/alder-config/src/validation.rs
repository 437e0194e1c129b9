//! Pluggable descriptor validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for
//! library use). The resolver itself is total; validation is an opt-in layer
//! for failing fast before the descriptor reaches the engine.

use std::path::Path;

use crate::bundle::{BuildDescriptor, PluginConfig};
use crate::error::{ConfigError, Result};

/// Trait for pluggable descriptor validation strategies
pub trait ConfigValidator {
    /// Validate a build descriptor
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Use this for library use cases where files are in-memory or virtual.
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()> {
        if descriptor.entry.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "entry path cannot be empty".to_string(),
                hint: None,
            });
        }

        if descriptor.output.filename.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output filename cannot be empty".to_string(),
                hint: Some("Use a filename like 'bundle.js'".to_string()),
            });
        }

        if descriptor.rules.is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "no transform rules configured".to_string(),
                hint: Some("At least one rule is needed to load source files".to_string()),
            });
        }

        for rule in &descriptor.rules {
            if rule.test.trim().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: "transform rule extension cannot be empty".to_string(),
                    hint: None,
                });
            }
            if rule.exclude.iter().any(|pattern| pattern.trim().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: "exclusion patterns cannot be empty".to_string(),
                    hint: Some("Remove empty strings from 'exclude'".to_string()),
                });
            }
        }

        if descriptor.dev_server.port == 0 {
            return Err(ConfigError::SchemaValidation {
                message: "dev server port cannot be 0".to_string(),
                hint: Some("Pick a fixed port so the serving URL is stable".to_string()),
            });
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Validates that the entry file and plugin templates exist on disk.
/// Relative descriptor paths are anchored at the validator root; absolute
/// ones (the resolver emits an absolute entry) are checked as-is. Pass the
/// same root the descriptor was resolved with so both kinds agree.
pub struct FsValidator {
    root: std::path::PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn anchored(&self, path: &Path) -> std::path::PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, descriptor: &BuildDescriptor) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(descriptor)?;

        // Then validate filesystem references
        let entry = self.anchored(&descriptor.entry);
        if !entry.exists() {
            return Err(ConfigError::EntryNotFound { path: entry });
        }

        for plugin in &descriptor.plugins {
            match plugin {
                PluginConfig::Html(html) => {
                    let template = self.anchored(&html.template);
                    if !template.exists() {
                        return Err(ConfigError::TemplateNotFound { path: template });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(descriptor: &BuildDescriptor) -> Result<()> {
    SchemaValidator.validate(descriptor)
}

/// Convenience function for filesystem validation
///
/// `root` should be the project root the descriptor was resolved with.
pub fn validate_fs(descriptor: &BuildDescriptor, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(descriptor)
}
