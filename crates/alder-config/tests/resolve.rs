//! Tests for the build configuration resolver.

use alder_config::{resolve, Loader, Mode, PluginConfig, ResolveOptions, DEFAULT_DEV_PORT};
use std::path::PathBuf;

fn elm_optimize(descriptor: &alder_config::BuildDescriptor) -> bool {
    descriptor
        .rules
        .iter()
        .find_map(|rule| match &rule.loader {
            Loader::Elm(elm) => Some(elm.optimize),
            _ => None,
        })
        .expect("elm rule present")
}

#[test]
fn default_options_resolve_development() {
    let descriptor = resolve("/proj", &ResolveOptions::default());
    assert_eq!(descriptor.mode, Mode::Development);
    assert!(!elm_optimize(&descriptor));
    assert_eq!(descriptor.dev_server.port, 8000);
}

#[test]
fn production_resolves_optimized() {
    let descriptor = resolve("/proj", &ResolveOptions { production: true });
    assert_eq!(descriptor.mode, Mode::Production);
    assert!(elm_optimize(&descriptor));
    assert_eq!(descriptor.dev_server.port, 8000);
}

#[test]
fn explicit_false_matches_default() {
    let explicit = resolve("/proj", &ResolveOptions { production: false });
    let default = resolve("/proj", &ResolveOptions::default());
    assert_eq!(explicit, default);
}

#[test]
fn resolver_is_deterministic() {
    let options = ResolveOptions { production: true };
    assert_eq!(resolve("/proj", &options), resolve("/proj", &options));
}

#[test]
fn fixed_fields_are_input_independent() {
    let dev = resolve("/proj", &ResolveOptions::default());
    let prod = resolve("/proj", &ResolveOptions { production: true });

    assert_eq!(dev.entry, prod.entry);
    assert_eq!(dev.entry, PathBuf::from("/proj/src/index.js"));
    assert_eq!(dev.output, prod.output);
    assert_eq!(dev.output.dir, PathBuf::from("/proj/public"));
    assert_eq!(dev.output.filename, "bundle.js");
    assert_eq!(dev.dev_server, prod.dev_server);
    assert_eq!(dev.dev_server.port, DEFAULT_DEV_PORT);

    for (a, b) in dev.rules.iter().zip(&prod.rules) {
        assert_eq!(a.exclude, b.exclude);
    }
}

#[test]
fn exactly_two_rules_with_shared_exclusions() {
    let descriptor = resolve("/proj", &ResolveOptions::default());
    assert_eq!(descriptor.rules.len(), 2);
    for rule in &descriptor.rules {
        assert_eq!(rule.exclude, vec!["node_modules", "elm-stuff"]);
    }
    assert_eq!(descriptor.rules[0].test, "js");
    assert_eq!(descriptor.rules[1].test, "elm");
}

#[test]
fn script_rule_uses_env_preset() {
    let descriptor = resolve("/proj", &ResolveOptions::default());
    let presets = descriptor
        .rules
        .iter()
        .find_map(|rule| match &rule.loader {
            Loader::Script(script) => Some(script.presets.clone()),
            _ => None,
        })
        .expect("script rule present");
    assert_eq!(presets, vec!["env".to_string()]);
}

#[test]
fn exactly_one_html_plugin() {
    let descriptor = resolve("/proj", &ResolveOptions { production: true });
    assert_eq!(descriptor.plugins.len(), 1);
    assert_eq!(descriptor.plugins[0].name(), "html");
    let PluginConfig::Html(html) = &descriptor.plugins[0];
    assert_eq!(html.template, PathBuf::from("src/index.html"));
    assert_eq!(html.filename, "index.html");
}

#[test]
fn rules_match_project_sources() {
    let descriptor = resolve("/proj", &ResolveOptions::default());
    let js = &descriptor.rules[0];
    let elm = &descriptor.rules[1];

    assert!(js.applies_to(&PathBuf::from("/proj/src/index.js")));
    assert!(elm.applies_to(&PathBuf::from("/proj/src/Main.elm")));
    assert!(!js.applies_to(&PathBuf::from("/proj/node_modules/pkg/index.js")));
    assert!(!elm.applies_to(&PathBuf::from("/proj/elm-stuff/0.19.1/Main.elm")));
}
