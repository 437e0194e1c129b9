//! The build configuration resolver.
//!
//! A pure function from [`ResolveOptions`] to a [`BuildDescriptor`]: given the
//! project root and the production flag it returns the complete descriptor the
//! engine consumes. It never touches the filesystem; missing entry files and
//! the like surface later, from the engine or from [`crate::validation`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bundle::{
    BuildDescriptor, ElmOptions, HtmlOptions, Loader, Mode, OutputOptions, PluginConfig,
    ScriptOptions, TransformRule,
};
use crate::dev::DevServerConfig;

/// Path substrings excluded from every transform rule
pub const EXCLUDED_PATTERNS: [&str; 2] = ["node_modules", "elm-stuff"];

/// Caller-supplied knobs for [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolveOptions {
    /// Build an optimized production bundle
    #[serde(default)]
    pub production: bool,
}

/// Resolve the build descriptor for a project rooted at `project_root`.
///
/// Total and deterministic: equal inputs yield equal descriptors. The
/// descriptor is constructed fresh on every call and never mutated afterward.
pub fn resolve(project_root: impl AsRef<Path>, options: &ResolveOptions) -> BuildDescriptor {
    let root = project_root.as_ref();
    let mode = if options.production {
        Mode::Production
    } else {
        Mode::Development
    };
    tracing::debug!("resolving {:?} build for {}", mode, root.display());

    let exclude: Vec<String> = EXCLUDED_PATTERNS.iter().map(|s| s.to_string()).collect();

    BuildDescriptor {
        mode,
        entry: root.join("src").join("index.js"),
        output: OutputOptions {
            dir: root.join("public"),
            filename: "bundle.js".to_string(),
        },
        rules: vec![
            TransformRule {
                test: "js".to_string(),
                exclude: exclude.clone(),
                loader: Loader::Script(ScriptOptions::default()),
            },
            TransformRule {
                test: "elm".to_string(),
                exclude,
                loader: Loader::Elm(ElmOptions {
                    optimize: mode.is_production(),
                }),
            },
        ],
        plugins: vec![PluginConfig::Html(HtmlOptions::new("src/index.html"))],
        dev_server: DevServerConfig::default(),
    }
}
