use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bundle::helpers::{default_exclude, default_presets};

/// Per-file-pattern processing step applied before graph resolution.
///
/// A rule matches source files by extension and hands them to a loader. Rules
/// are independent: their extensions are disjoint, so declaration order does
/// not imply precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformRule {
    /// File extension this rule matches (without the leading dot)
    pub test: String,

    /// Path substrings that opt a file out of the rule
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    /// Loader the matched files are piped through
    pub loader: Loader,
}

impl TransformRule {
    /// Whether this rule matches the given source path.
    ///
    /// The extension must match `test` and the path must not contain any of
    /// the excluded substrings anywhere.
    pub fn applies_to(&self, path: &Path) -> bool {
        let matches_ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.test);
        if !matches_ext {
            return false;
        }

        let haystack = path.to_string_lossy();
        !self.exclude.iter().any(|ex| haystack.contains(ex.as_str()))
    }
}

/// Loader attached to a transform rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "lowercase")]
pub enum Loader {
    /// Downlevel modern JavaScript for the configured environment targets
    Script(ScriptOptions),
    /// Compile Elm modules to JavaScript
    Elm(ElmOptions),
}

/// Options for the JavaScript downleveling loader
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptOptions {
    /// Environment-targeting presets (default: `["env"]`)
    #[serde(default = "default_presets")]
    pub presets: Vec<String>,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            presets: default_presets(),
        }
    }
}

/// Options for the Elm compiler loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElmOptions {
    /// Compile with `--optimize` (production builds)
    #[serde(default)]
    pub optimize: bool,
}
