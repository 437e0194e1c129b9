use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::bundle::helpers::default_html_filename;

/// HTML generation options
///
/// The engine renders the template, injects a script tag pointing at the
/// emitted bundle, and writes the result into the output directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlOptions {
    /// Path to the HTML template, relative to the project root
    pub template: PathBuf,

    /// Output filename for generated HTML (default: "index.html")
    #[serde(default = "default_html_filename")]
    pub filename: String,
}

impl HtmlOptions {
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            filename: default_html_filename(),
        }
    }
}
