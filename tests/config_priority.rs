//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file
//! settings. Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file values
//! 3. Built-in defaults

use std::path::PathBuf;

use ydict_plugin::config::{
    ApiSection, ConfigFile, PluginSection, ResolveOptions, resolve_config,
};
use ydict_plugin::format::Variant;
use ydict_plugin::translation::{TRANSLATE_ENDPOINT, USER_AGENT};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        plugin: PluginSection {
            variant: Some(Variant::Browser),
            record_file: Some(PathBuf::from("/tmp/ydict-tests/record.csv")),
        },
        api: ApiSection {
            endpoint: Some("http://config.local/trans".to_string()),
            user_agent: None,
            proxy: None,
        },
    }
}

#[test]
fn test_cli_variant_overrides_config_variant() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        variant: Some(Variant::Clipboard), // CLI specifies clipboard
    };

    let resolved = resolve_config(&options, &config);

    assert_eq!(resolved.variant, Variant::Clipboard);
}

#[test]
fn test_config_variant_used_when_cli_not_specified() {
    let config = make_config_with_defaults();
    let options = ResolveOptions { variant: None };

    let resolved = resolve_config(&options, &config);

    assert_eq!(resolved.variant, Variant::Browser);
}

#[test]
fn test_builtin_variant_when_nothing_specified() {
    let mut config = make_config_with_defaults();
    config.plugin.variant = None;
    let options = ResolveOptions { variant: None };

    let resolved = resolve_config(&options, &config);

    assert_eq!(resolved.variant, Variant::Clipboard);
}

#[test]
fn test_config_record_file_is_used() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config);

    assert_eq!(
        resolved.record_file,
        PathBuf::from("/tmp/ydict-tests/record.csv")
    );
}

#[test]
fn test_config_endpoint_overrides_builtin() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config);

    assert_eq!(resolved.client.endpoint, "http://config.local/trans");
    // Keys left out of the [api] section keep their built-in values.
    assert_eq!(resolved.client.user_agent, USER_AGENT);
    assert!(resolved.client.proxy.is_none());
}

#[test]
fn test_builtin_client_when_api_section_empty() {
    let mut config = make_config_with_defaults();
    config.api = ApiSection::default();

    let resolved = resolve_config(&ResolveOptions::default(), &config);

    assert_eq!(resolved.client.endpoint, TRANSLATE_ENDPOINT);
    assert_eq!(resolved.client.user_agent, USER_AGENT);
}
