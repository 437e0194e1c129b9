use serde::{Deserialize, Serialize};

use crate::bundle::html::HtmlOptions;

/// A configured plugin invocation.
///
/// Plugins run in declaration order after the module graph is emitted. Only
/// HTML generation exists today; future kinds (asset copying, manifest
/// emission) get their own variants once their options settle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PluginConfig {
    /// Generate an HTML page referencing the bundle
    Html(HtmlOptions),
}

impl PluginConfig {
    /// Friendly name, used in engine logs
    pub fn name(&self) -> &'static str {
        match self {
            PluginConfig::Html(_) => "html",
        }
    }
}
