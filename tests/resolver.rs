//! End-to-end resolution against real theme documents.

use std::fs;
use std::path::PathBuf;

use folioforge::core::traits::Validate;
use folioforge::hast::{Element, Properties};
use folioforge::integrations::Integration;
use folioforge::processors::{ProcessorHandle, ProcessorOptions};
use folioforge::{FolioError, ResolverBuilder, SiteConfig};
use tempfile::TempDir;

fn theme_fixture(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("dark-theme.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_resolve_defaults_from_bundled_theme() {
    // Integration tests run from the package root, next to dark-theme.json.
    let config = SiteConfig::resolve_arc().unwrap();

    assert_eq!(config.site.as_str(), "https://rajumodi27.github.io/");
    assert_eq!(config.theme().name(), Some("dark"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_pipeline_shape_is_fixed() {
    let temp_dir = TempDir::new().unwrap();
    let theme = theme_fixture(&temp_dir, r#"{"name":"anything","colors":{}}"#);

    let config = ResolverBuilder::new().with_theme_path(&theme).build().unwrap();

    assert_eq!(
        config.integrations,
        [
            Integration::Tailwind,
            Integration::React,
            Integration::Mdx,
            Integration::Sitemap
        ]
    );

    let markdown = &config.markdown;
    assert!(!markdown.syntax_highlight_enabled);
    assert!(markdown.extend_default_plugins);
    assert_eq!(markdown.post_processors.len(), 3);
    assert_eq!(
        markdown.handles(),
        [
            ProcessorHandle::PrettyCode,
            ProcessorHandle::Slug,
            ProcessorHandle::AutolinkHeadings
        ]
    );
    assert!(matches!(
        markdown.post_processors[1].options,
        ProcessorOptions::None
    ));
}

#[test]
fn test_literals_do_not_depend_on_theme() {
    let temp_dir = TempDir::new().unwrap();
    for body in [
        r#"{}"#,
        r#"{"name":"light","type":"light"}"#,
        r#"{"syntaxHighlight":true,"extendDefaultPlugins":false}"#,
    ] {
        let theme = theme_fixture(&temp_dir, body);
        let config = ResolverBuilder::new().with_theme_path(&theme).build().unwrap();
        assert!(!config.markdown.syntax_highlight_enabled);
        assert!(config.markdown.extend_default_plugins);
    }
}

#[test]
fn test_theme_reaches_both_consumers_unmodified() {
    let temp_dir = TempDir::new().unwrap();
    let body = r##"{
        "name": "dark",
        "tokenColors": [{"scope": "comment", "settings": {"foreground": "#8b949e"}}]
    }"##;
    let theme = theme_fixture(&temp_dir, body);

    let config = ResolverBuilder::new().with_theme_path(&theme).build().unwrap();
    let pretty = config.markdown.pretty_code_options().unwrap();

    let expected: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(pretty.theme.as_value(), &expected);
    assert!(pretty.theme.shares_document_with(&config.markdown.shiki_config.theme));
    assert!(pretty.tokens_map.is_empty());
}

#[test]
fn test_callbacks_through_resolved_options() {
    let temp_dir = TempDir::new().unwrap();
    let theme = theme_fixture(&temp_dir, "{}");
    let config = ResolverBuilder::new().with_theme_path(&theme).build().unwrap();
    let pretty = config.markdown.pretty_code_options().unwrap();

    let mut line = Element::new("span")
        .with_properties(Properties::with_classes(Vec::<String>::new()));
    pretty.visit_highlighted_line(Some(&mut line));
    assert_eq!(line.class_name().unwrap(), ["highlight-line".to_string()]);

    let mut untouched = Element::new("span");
    pretty.visit_highlighted_line(Some(&mut untouched));
    assert_eq!(untouched, Element::new("span"));

    let mut chars =
        Element::new("mark").with_properties(Properties::with_classes(["foo"]));
    pretty.visit_highlighted_chars(Some(&mut chars));
    assert_eq!(
        chars.class_name().unwrap(),
        ["foo".to_string(), "highlighted-chars".to_string()]
    );

    let mut fresh = Element::new("mark").with_properties(Properties::default());
    pretty.visit_highlighted_chars(Some(&mut fresh));
    assert_eq!(fresh.class_name().unwrap(), ["highlighted-chars".to_string()]);

    let autolink = config.markdown.autolink_options().unwrap();
    assert_eq!(
        autolink.properties.class_name,
        Some(vec!["anchor".to_string()])
    );
}

#[test]
fn test_broken_theme_halts_resolution() {
    let temp_dir = TempDir::new().unwrap();
    let theme = theme_fixture(&temp_dir, "{\"name\": \"dark\",");

    let err = ResolverBuilder::new().with_theme_path(&theme).build().unwrap_err();
    assert!(matches!(err, FolioError::ResourceLoad { .. }));

    let err = ResolverBuilder::new()
        .with_theme_path(temp_dir.path().join("nope.json"))
        .build()
        .unwrap_err();
    assert!(err.is_resource_load());
}
