//! Shared test utilities for the docsite-config test suite.
//!
//! Builds raw configuration values around a minimal valid document so each
//! test only spells out the keys it cares about.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let raw = minimal_with(r#"baseUrl = "b""#);
//! let err = load(&raw).unwrap_err();
//! assert_eq!(err.field(), "baseUrl");
//! ```

use std::fs;
use tempfile::TempDir;

use crate::config::{CONFIG_FILE_NAME, merge_toml};

/// Smallest document that passes validation.
pub const MINIMAL_TOML: &str = r#"
title = "T"
url = "https://x.io/"
baseUrl = "/b/"
projectName = "p"
organizationName = "o"
"#;

pub const REQUIRED_KEYS: &[&str] = &["title", "url", "baseUrl", "projectName", "organizationName"];

pub fn minimal_raw() -> toml::Value {
    toml::from_str(MINIMAL_TOML).unwrap()
}

/// The minimal document with `snippet` merged over it.
///
/// `snippet` is parsed on its own, so it may redefine keys from the minimal
/// document or open new tables.
pub fn minimal_with(snippet: &str) -> toml::Value {
    let overlay: toml::Value = toml::from_str(snippet)
        .unwrap_or_else(|e| panic!("test snippet is not valid TOML: {e}\n{snippet}"));
    merge_toml(minimal_raw(), overlay)
}

/// The minimal document with one key removed.
pub fn minimal_without(key: &str) -> toml::Value {
    let mut raw = minimal_raw();
    raw.as_table_mut().unwrap().remove(key);
    raw
}

/// Write `content` as `siteConfig.toml` into a fresh temp directory.
pub fn write_config(content: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(CONFIG_FILE_NAME), content).unwrap();
    tmp
}

/// An empty environment for `load_config`.
pub fn no_env() -> Vec<(String, String)> {
    Vec::new()
}
