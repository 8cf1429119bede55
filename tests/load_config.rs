//! End-to-end loading of a real site configuration from disk.
//!
//! Copies `fixtures/siteConfig.toml` into a temp directory so tests can edit
//! it without touching the fixture.

use chrono::Datelike;
use docsite_config::config::{
    CONFIG_FILE_NAME, ConfigError, ConfigValidationError, load_config, load_str, load_with_year,
};
use docsite_config::types::{NavigationLink, OnPageNav};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn fixture() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/siteConfig.toml");
    fs::read_to_string(path).unwrap()
}

fn project_with(content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE_NAME), content).unwrap();
    tmp
}

fn no_env() -> Vec<(String, String)> {
    Vec::new()
}

#[test]
fn fixture_loads_every_section() {
    let tmp = project_with(&fixture());
    let config = load_config(tmp.path(), no_env()).unwrap();

    assert_eq!(config.title(), "Scala 3 Macro Tutorial");
    assert_eq!(config.url().as_str(), "https://lampepfl.github.io/");
    assert_eq!(config.base_url(), "/scala3-macro-tutorial/");
    assert_eq!(config.project_name(), "scala3-macro-tutorial");
    assert_eq!(config.organization_name(), "lampepfl");
    assert_eq!(config.custom_docs_path(), "mdoc/target/mdoc");
    assert_eq!(config.on_page_nav(), OnPageNav::Separate);
    assert_eq!(config.highlight().theme(), "github");
    assert_eq!(config.colors().primary_color(), "#ca445e");
    assert_eq!(config.colors().secondary_color(), "#224951");
    assert_eq!(config.images().favicon(), Some("img/dotty-logo.svg"));
    assert_eq!(config.images().header_icon(), Some("img/dotty-logo-white.svg"));
    assert_eq!(config.stylesheets().len(), 2);
    assert!(config.algolia().is_none());
    assert_eq!(
        config.site_root().as_str(),
        "https://lampepfl.github.io/scala3-macro-tutorial/"
    );
}

#[test]
fn fixture_header_links_keep_order_and_kind() {
    let tmp = project_with(&fixture());
    let config = load_config(tmp.path(), no_env()).unwrap();

    let labels: Vec<&str> = config.header_links().iter().map(|l| l.label()).collect();
    assert_eq!(labels, vec!["Tutorial", "Contribute", "GitHub"]);

    assert!(matches!(&config.header_links()[0], NavigationLink::Doc(d) if d.doc() == "tutorial/introduction"));
    assert!(matches!(&config.header_links()[2], NavigationLink::External(e)
        if e.href().as_str() == "https://github.com/lampepfl/scala3-macro-tutorial"));
}

#[test]
fn fixture_copyright_uses_current_year() {
    let config = load_str(&fixture()).unwrap();
    let year = chrono::Local::now().year();
    assert_eq!(config.copyright(), format!("Copyright © {year} LAMP EPFL"));
}

#[test]
fn environment_overrides_file_values() {
    let tmp = project_with(&fixture());
    let config = load_config(
        tmp.path(),
        [
            ("DOCSITE_BASE_URL", "/preview/"),
            ("DOCSITE_TAGLINE", "Preview build"),
        ],
    )
    .unwrap();
    assert_eq!(config.base_url(), "/preview/");
    assert_eq!(config.tagline(), "Preview build");
    // Untouched keys come from the file
    assert_eq!(config.title(), "Scala 3 Macro Tutorial");
}

#[test]
fn broken_link_in_fixture_is_reported_with_path() {
    let content = fixture().replace(
        r#"{ doc = "contributing", label = "Contribute" },"#,
        r#"{ label = "Contribute" },"#,
    );
    let tmp = project_with(&content);
    let err = load_config(tmp.path(), no_env()).unwrap_err();
    match err {
        ConfigError::Validation(ConfigValidationError::Format { field, .. }) => {
            assert_eq!(field, "headerLinks[1]");
        }
        other => panic!("expected format error, got {other:?}"),
    }
}

#[test]
fn missing_required_field_in_file() {
    let content = fixture().replace(r#"organizationName = "lampepfl""#, "");
    let tmp = project_with(&content);
    let err = load_config(tmp.path(), no_env()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Validation(ConfigValidationError::MissingField { ref field }) if field == "organizationName"
    ));
}

#[test]
fn missing_file_reports_expected_path() {
    let tmp = TempDir::new().unwrap();
    let err = load_config(tmp.path(), no_env()).unwrap_err();
    match err {
        ConfigError::NotFound(path) => assert_eq!(path, tmp.path().join(CONFIG_FILE_NAME)),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn full_config_survives_serialize_and_reload() {
    let content = format!(
        r#"{}
[fonts]
body = ["Lato", "sans-serif"]
code = ["Fira Code", "monospace"]

[algolia]
apiKey = "search-only-key"
indexName = "scala3-macro-tutorial"
"#,
        fixture().replace(
            "onPageNav = \"separate\"",
            "onPageNav = \"separate\"\nscripts = [\"https://buttons.github.io/buttons.js\"]",
        )
    );
    let raw: toml::Value = toml::from_str(&content).unwrap();
    let config = load_with_year(&raw, 2024).unwrap();
    assert_eq!(config.scripts().len(), 1);
    assert_eq!(config.fonts().len(), 2);
    assert!(config.algolia().is_some());
    assert!(config.repo_url().is_some());
    assert_eq!(config.images().twitter_image(), Some("img/dotty-logo.svg"));

    let back = toml::Value::try_from(&config).unwrap();
    let reloaded = load_with_year(&back, 2024).unwrap();
    assert_eq!(config, reloaded);
}

#[test]
fn loaded_config_is_shareable_across_threads() {
    let config = load_str(&fixture()).unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(config.header_links().len(), 3));
        }
    });
}
