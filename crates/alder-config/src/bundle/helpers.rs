// Helper defaults
pub(crate) fn default_bundle_filename() -> String {
    "bundle.js".to_string()
}

pub(crate) fn default_html_filename() -> String {
    "index.html".to_string()
}

pub(crate) fn default_exclude() -> Vec<String> {
    vec!["node_modules".to_string(), "elm-stuff".to_string()]
}

pub(crate) fn default_presets() -> Vec<String> {
    vec!["env".to_string()]
}
