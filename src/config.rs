//! Site configuration module.
//!
//! Handles loading, validating, and exposing `siteConfig.toml`. The loader is a
//! single pass over the raw TOML value: each known key is checked for presence,
//! primitive type, and format, defaults are filled in, and the result is an
//! immutable [`SiteConfiguration`]. The first problem found aborts the load.
//!
//! ## Config File Location
//!
//! ```text
//! my-docs/
//! ├── siteConfig.toml    # Site configuration (required)
//! ├── docs/              # Markdown sources (see `customDocsPath`)
//! └── static/img/        # Icons referenced by `headerIcon`, `favicon`, ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # Required
//! title = "Scala 3 Macro Tutorial"
//! url = "https://lampepfl.github.io/"
//! baseUrl = "/scala3-macro-tutorial/"
//! projectName = "scala3-macro-tutorial"
//! organizationName = "lampepfl"
//!
//! # Optional - defaults shown where they exist
//! tagline = ""
//! copyright = "Copyright © {year} LAMP EPFL"   # {year} → current year
//! editUrl = "https://github.com/lampepfl/scala3-macro-tutorial/edit/master/docs/"
//! onPageNav = "none"                           # "separate" | "none"
//! stylesheets = []
//!
//! headerLinks = [
//!   { doc = "tutorial/introduction", label = "Tutorial" },
//!   { href = "https://github.com/lampepfl", label = "GitHub", external = true },
//! ]
//!
//! [colors]
//! primaryColor = "#2e8555"
//! secondaryColor = "#205d3b"
//!
//! [highlight]
//! theme = "default"
//! ```
//!
//! ## Layering
//!
//! [`load_config`] reads the file, lays `DOCSITE_*` environment overrides on
//! top with [`merge_toml`], then runs [`load`]. Unknown keys are rejected to
//! catch typos early.

use crate::types::{
    AlgoliaConfig, ColorConfig, DocLink, ExternalLink, HIGHLIGHT_THEMES, HighlightConfig,
    ImagesConfig, NavigationLink, OnPageNav,
};
use crate::validate::{self, Fields};
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Conventional file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "siteConfig.toml";

/// Placeholder in `copyright` replaced with the current year at load time.
pub const YEAR_TOKEN: &str = "{year}";

/// Prefix for environment overrides, e.g. `DOCSITE_BASE_URL`.
pub const ENV_PREFIX: &str = "DOCSITE_";

/// Field path used when the input itself is not a table.
pub const ROOT_FIELD: &str = "<root>";

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(#[from] ConfigValidationError),
}

/// A single rejected field. Every variant names the offending field path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Input is not a table, a value has the wrong primitive type, or a key
    /// is not part of the schema.
    #[error("`{field}`: {reason}")]
    Shape { field: String, reason: String },
    /// A required field is absent.
    #[error("`{field}`: required field is missing")]
    MissingField { field: String },
    /// Right type, wrong content.
    #[error("`{field}`: {reason}")]
    Format { field: String, reason: String },
}

impl ConfigValidationError {
    pub fn wrong_type(field: impl Into<String>, expected: &str, found: &toml::Value) -> Self {
        Self::Shape {
            field: field.into(),
            reason: format!("expected {expected}, found {}", found.type_str()),
        }
    }

    pub fn unknown_key(field: impl Into<String>) -> Self {
        Self::Shape {
            field: field.into(),
            reason: "unknown field".to_string(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::Shape { field, .. } | Self::MissingField { field } | Self::Format { field, .. } => {
                field
            }
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Shape { reason, .. } | Self::Format { reason, .. } => reason,
            Self::MissingField { .. } => "required field is missing",
        }
    }
}

// =============================================================================
// SiteConfiguration
// =============================================================================

/// Validated site configuration.
///
/// Only [`load`] builds one, so every value handed to a collaborator already
/// satisfies the schema. Fields are private; read them through the accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfiguration {
    title: String,
    tagline: String,
    url: Url,
    base_url: String,
    project_name: String,
    organization_name: String,
    header_links: Vec<NavigationLink>,
    colors: ColorConfig,
    stylesheets: Vec<Url>,
    copyright: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repo_url: Option<Url>,
    custom_docs_path: String,
    #[serde(flatten)]
    images: ImagesConfig,
    highlight: HighlightConfig,
    on_page_nav: OnPageNav,
    scripts: Vec<Url>,
    fonts: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    algolia: Option<AlgoliaConfig>,
}

impl SiteConfiguration {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    /// Absolute base URL of the host, e.g. `https://lampepfl.github.io/`.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Root-relative path the site is served under; starts and ends with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn organization_name(&self) -> &str {
        &self.organization_name
    }

    /// Header menu entries in declaration order.
    pub fn header_links(&self) -> &[NavigationLink] {
        &self.header_links
    }

    pub fn colors(&self) -> &ColorConfig {
        &self.colors
    }

    /// Stylesheet URLs in load order.
    pub fn stylesheets(&self) -> &[Url] {
        &self.stylesheets
    }

    /// Copyright line with the year already substituted.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn edit_url(&self) -> Option<&Url> {
        self.edit_url.as_ref()
    }

    pub fn repo_url(&self) -> Option<&Url> {
        self.repo_url.as_ref()
    }

    /// Directory holding the documentation sources, relative to the project root.
    pub fn custom_docs_path(&self) -> &str {
        &self.custom_docs_path
    }

    pub fn images(&self) -> &ImagesConfig {
        &self.images
    }

    pub fn highlight(&self) -> &HighlightConfig {
        &self.highlight
    }

    pub fn on_page_nav(&self) -> OnPageNav {
        self.on_page_nav
    }

    pub fn scripts(&self) -> &[Url] {
        &self.scripts
    }

    /// Font stacks keyed by name, e.g. `myFont = ["Lato", "Serif"]`.
    pub fn fonts(&self) -> &BTreeMap<String, Vec<String>> {
        &self.fonts
    }

    /// Search integration, if configured. `None` means search is not built.
    pub fn algolia(&self) -> Option<&AlgoliaConfig> {
        self.algolia.as_ref()
    }

    /// Public root of the published site: `url` joined with `baseUrl`.
    pub fn site_root(&self) -> Url {
        // baseUrl is a validated absolute path, so the join cannot fail.
        self.url.join(&self.base_url).unwrap_or_else(|_| self.url.clone())
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Validate a raw configuration value, resolving `{year}` against the clock.
pub fn load(raw: &toml::Value) -> Result<SiteConfiguration, ConfigValidationError> {
    load_with_year(raw, current_year())
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Same as [`load`] with the copyright year supplied by the caller.
pub fn load_with_year(
    raw: &toml::Value,
    year: i32,
) -> Result<SiteConfiguration, ConfigValidationError> {
    let table = raw
        .as_table()
        .ok_or_else(|| ConfigValidationError::wrong_type(ROOT_FIELD, "table", raw))?;
    let mut fields = Fields::new("", table);

    // Required, in a fixed order so the reported error is deterministic.
    let title = validate::non_empty("title", fields.required_str("title")?)?.to_string();
    let url = validate::absolute_url("url", fields.required_str("url")?)?;
    let base_url = validate::base_url("baseUrl", fields.required_str("baseUrl")?)?.to_string();
    let project_name =
        validate::identifier("projectName", fields.required_str("projectName")?)?.to_string();
    let organization_name =
        validate::identifier("organizationName", fields.required_str("organizationName")?)?
            .to_string();

    let tagline = fields.optional_str("tagline")?.unwrap_or_default().to_string();

    let header_links = match fields.get("headerLinks") {
        Some(value) => parse_header_links(value)?,
        None => Vec::new(),
    };

    let colors = match fields.get("colors") {
        Some(value) => parse_colors(value)?,
        None => ColorConfig::default(),
    };

    let stylesheets = match fields.get("stylesheets") {
        Some(value) => parse_url_list("stylesheets", value)?,
        None => Vec::new(),
    };

    let copyright = fields
        .optional_str("copyright")?
        .map(|text| resolve_year(text, year))
        .unwrap_or_default();

    let edit_url = fields
        .optional_str("editUrl")?
        .map(|u| validate::absolute_url("editUrl", u))
        .transpose()?;

    let repo_url = fields
        .optional_str("repoUrl")?
        .map(|u| validate::absolute_url("repoUrl", u))
        .transpose()?;

    let custom_docs_path = match fields.optional_str("customDocsPath")? {
        Some(path) => validate::relative_path("customDocsPath", path)?.to_string(),
        None => default_docs_path(),
    };

    let mut images = ImagesConfig::default();
    for &key in ImagesConfig::KEYS {
        if let Some(path) = fields.optional_str(key)? {
            let path = validate::relative_path(key, path)?.to_string();
            if let Some(slot) = images.slot_mut(key) {
                *slot = Some(path);
            }
        }
    }

    let highlight = match fields.get("highlight") {
        Some(value) => parse_highlight(value)?,
        None => HighlightConfig::default(),
    };

    let on_page_nav = match fields.optional_str("onPageNav")? {
        Some(mode) => OnPageNav::parse(mode).ok_or_else(|| {
            ConfigValidationError::format(
                "onPageNav",
                format!(
                    "`{mode}` is not one of: {}",
                    OnPageNav::VALUES.join(", ")
                ),
            )
        })?,
        None => OnPageNav::default(),
    };

    let scripts = match fields.get("scripts") {
        Some(value) => parse_url_list("scripts", value)?,
        None => Vec::new(),
    };

    let fonts = match fields.get("fonts") {
        Some(value) => parse_fonts(value)?,
        None => BTreeMap::new(),
    };

    let algolia = fields.get("algolia").map(parse_algolia).transpose()?;

    fields.deny_unknown()?;

    let config = SiteConfiguration {
        title,
        tagline,
        url,
        base_url,
        project_name,
        organization_name,
        header_links,
        colors,
        stylesheets,
        copyright,
        edit_url,
        repo_url,
        custom_docs_path,
        images,
        highlight,
        on_page_nav,
        scripts,
        fonts,
        algolia,
    };

    if config.images.favicon.is_none() {
        warn!("`favicon` is not set; browsers will show a default icon");
    }
    if config.images.header_icon.is_none() {
        warn!("`headerIcon` is not set; the header will show the title only");
    }
    debug!(
        site_root = %config.site_root(),
        header_links = config.header_links.len(),
        "site configuration loaded"
    );

    Ok(config)
}

fn default_docs_path() -> String {
    "docs".to_string()
}

/// Replace every `{year}` in `text`.
pub fn resolve_year(text: &str, year: i32) -> String {
    text.replace(YEAR_TOKEN, &year.to_string())
}

/// Normalize `headerLinks` entries into [`NavigationLink`]s.
///
/// - `doc` (and no `href`) → doc link
/// - `href` with `external = true` (and no `doc`) → external link
/// - anything else is rejected
fn parse_header_links(value: &toml::Value) -> Result<Vec<NavigationLink>, ConfigValidationError> {
    validate::as_array("headerLinks", value)?
        .iter()
        .enumerate()
        .map(|(i, entry)| parse_header_link(&format!("headerLinks[{i}]"), entry))
        .collect()
}

fn parse_header_link(
    path: &str,
    entry: &toml::Value,
) -> Result<NavigationLink, ConfigValidationError> {
    let table = validate::as_table(path, entry)?;
    let mut fields = Fields::new(path, table);

    let is_doc = fields.has("doc");
    let is_external = fields.has("href");
    if is_doc && is_external {
        return Err(ConfigValidationError::format(
            path,
            "link has both `doc` and `href`; use one",
        ));
    }
    if !is_doc && !is_external {
        return Err(ConfigValidationError::format(
            path,
            "link must have either `doc` or `href` with `external = true`",
        ));
    }

    let link = if is_doc {
        if fields.has("external") {
            return Err(ConfigValidationError::format(
                path,
                "`external` only applies to links with `href`",
            ));
        }
        let doc = fields.required_str("doc")?;
        let doc = validate::non_empty(&fields.path("doc"), doc)?.to_string();
        let label = parse_label(&mut fields)?;
        NavigationLink::Doc(DocLink { doc, label })
    } else {
        let href = fields.required_str("href")?;
        let external = match fields.get("external") {
            Some(flag) => validate::as_bool(&fields.path("external"), flag)?,
            None => false,
        };
        if !external {
            return Err(ConfigValidationError::format(
                path,
                "link with `href` must set `external = true`",
            ));
        }
        let href = validate::url(&fields.path("href"), href)?;
        let label = parse_label(&mut fields)?;
        NavigationLink::External(ExternalLink { href, label })
    };

    fields.deny_unknown()?;
    Ok(link)
}

fn parse_label(fields: &mut Fields<'_>) -> Result<String, ConfigValidationError> {
    let label = fields.required_str("label")?;
    Ok(validate::non_empty(&fields.path("label"), label)?.to_string())
}

/// Known slots fall back to their defaults individually; extra slots are kept.
fn parse_colors(value: &toml::Value) -> Result<ColorConfig, ConfigValidationError> {
    let table = validate::as_table("colors", value)?;
    let mut fields = Fields::new("colors", table);
    let mut colors = ColorConfig::default();

    if let Some(color) = fields.optional_str("primaryColor")? {
        colors.primary_color = validate::css_color("colors.primaryColor", color)?.to_string();
    }
    if let Some(color) = fields.optional_str("secondaryColor")? {
        colors.secondary_color = validate::css_color("colors.secondaryColor", color)?.to_string();
    }
    for (name, value) in fields.rest() {
        let path = fields.path(name);
        let color = validate::as_str(&path, value)?;
        colors
            .extra
            .insert(name.clone(), validate::css_color(&path, color)?.to_string());
    }

    Ok(colors)
}

fn parse_highlight(value: &toml::Value) -> Result<HighlightConfig, ConfigValidationError> {
    let table = validate::as_table("highlight", value)?;
    let mut fields = Fields::new("highlight", table);
    let mut highlight = HighlightConfig::default();

    if let Some(theme) = fields.optional_str("theme")? {
        highlight.theme = validate::one_of("highlight.theme", theme, HIGHLIGHT_THEMES)?.to_string();
    }
    if let Some(lang) = fields.optional_str("defaultLang")? {
        highlight.default_lang =
            Some(validate::non_empty("highlight.defaultLang", lang)?.to_string());
    }

    fields.deny_unknown()?;
    Ok(highlight)
}

fn parse_url_list(field: &str, value: &toml::Value) -> Result<Vec<Url>, ConfigValidationError> {
    validate::as_str_array(field, value)?
        .into_iter()
        .enumerate()
        .map(|(i, u)| validate::absolute_url(&format!("{field}[{i}]"), u))
        .collect()
}

fn parse_fonts(
    value: &toml::Value,
) -> Result<BTreeMap<String, Vec<String>>, ConfigValidationError> {
    let table = validate::as_table("fonts", value)?;
    let mut fonts = BTreeMap::new();
    for (name, stack) in table {
        let path = validate::join("fonts", name);
        let families = validate::as_str_array(&path, stack)?;
        if families.is_empty() {
            return Err(ConfigValidationError::format(
                path,
                "font stack must list at least one family",
            ));
        }
        let families = families
            .into_iter()
            .enumerate()
            .map(|(i, family)| {
                validate::non_empty(&format!("{path}[{i}]"), family).map(str::to_string)
            })
            .collect::<Result<Vec<_>, _>>()?;
        fonts.insert(name.clone(), families);
    }
    Ok(fonts)
}

fn parse_algolia(value: &toml::Value) -> Result<AlgoliaConfig, ConfigValidationError> {
    let table = validate::as_table("algolia", value)?;
    let mut fields = Fields::new("algolia", table);
    let api_key = validate::non_empty("algolia.apiKey", fields.required_str("apiKey")?)?;
    let index_name = validate::non_empty("algolia.indexName", fields.required_str("indexName")?)?;
    fields.deny_unknown()?;
    Ok(AlgoliaConfig {
        api_key: api_key.to_string(),
        index_name: index_name.to_string(),
    })
}

// =============================================================================
// Sources and layering
// =============================================================================

/// Lay `overlay` over `base`, recursing into tables.
///
/// [`load_config`] uses this to put the [`env_overlay`] table on top of the
/// file. The overlay only carries top-level strings today, but nested tables
/// merge key by key so a `[colors]` overlay keeps unset slots from the file.
/// Any non-table overlay value replaces the base value outright.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Environment variable suffixes and the top-level keys they override.
const ENV_KEYS: &[(&str, &str)] = &[
    ("TITLE", "title"),
    ("TAGLINE", "tagline"),
    ("URL", "url"),
    ("BASE_URL", "baseUrl"),
    ("PROJECT_NAME", "projectName"),
    ("ORGANIZATION_NAME", "organizationName"),
    ("EDIT_URL", "editUrl"),
    ("REPO_URL", "repoUrl"),
    ("COPYRIGHT", "copyright"),
];

/// Build an overlay from `DOCSITE_*` variables.
///
/// Takes the variables as pairs so callers decide where they come from
/// ([`utf8_vars`] over the process environment in the binary, literals in
/// tests). Returns `None` when
/// no recognized variable is present.
pub fn env_overlay<I, K, V>(vars: I) -> Option<toml::Value>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut table = toml::Table::new();
    for (name, value) in vars {
        let Some(suffix) = name.as_ref().strip_prefix(ENV_PREFIX) else {
            continue;
        };
        if let Some((_, key)) = ENV_KEYS.iter().find(|(s, _)| *s == suffix) {
            debug!(variable = name.as_ref(), key, "environment override");
            table.insert((*key).to_string(), toml::Value::String(value.into()));
        }
    }
    (!table.is_empty()).then_some(toml::Value::Table(table))
}

/// Keep the variables whose name and value are valid UTF-8.
///
/// `std::env::vars()` panics on the first non-UTF-8 entry, even one unrelated
/// to `DOCSITE_*`; feed `std::env::vars_os()` through this instead.
pub fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
}

/// Load `siteConfig.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but cannot be read or is invalid TOML.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Io {
        path: config_path.clone(),
        source,
    })?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Parse and validate configuration held in a string.
pub fn load_str(content: &str) -> Result<SiteConfiguration, ConfigError> {
    let value: toml::Value = toml::from_str(content)?;
    Ok(load(&value)?)
}

/// Load the project's configuration: file, then environment overrides.
///
/// There is no stock fallback because the required fields have no defaults, so
/// a missing file is an error.
pub fn load_config<I, K, V>(root: &Path, vars: I) -> Result<SiteConfiguration, ConfigError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let raw = load_raw_config(root)?
        .ok_or_else(|| ConfigError::NotFound(root.join(CONFIG_FILE_NAME)))?;
    let merged = match env_overlay(vars) {
        Some(overlay) => merge_toml(raw, overlay),
        None => raw,
    };
    Ok(load(&merged)?)
}

// =============================================================================
// Stock config and CSS
// =============================================================================

/// Returns a fully-commented `siteConfig.toml` with every key explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Documentation Site Configuration
# ================================
# Required keys come first; everything after them is optional.
# Unknown keys cause an error.
#
# Top-level string keys can be overridden from the environment with
# DOCSITE_<KEY>, e.g. DOCSITE_BASE_URL="/preview/".

# Site title, shown in the header and the browser tab.
title = "My Project"

# Absolute URL of the host the site is published to.
url = "https://my-org.github.io/"

# Path the site is served under. Must start and end with "/".
baseUrl = "/my-project/"

# Repository and owner used when publishing.
projectName = "my-project"
organizationName = "my-org"

# ---------------------------------------------------------------------------
# Optional
# ---------------------------------------------------------------------------

# One-line description shown under the title.
tagline = ""

# Footer copyright line. "{year}" is replaced with the current year.
copyright = "Copyright © {year} My Org"

# Target of the "Edit this page" links.
# editUrl = "https://github.com/my-org/my-project/edit/main/docs/"

# Repository link shown in the footer.
# repoUrl = "https://github.com/my-org/my-project"

# Directory holding the documentation sources.
customDocsPath = "docs"

# Per-page table of contents: "separate" or "none".
onPageNav = "none"

# Header menu, in display order. Either { doc, label } for a document or
# { href, label, external = true } for an outside link.
headerLinks = [
  { doc = "introduction", label = "Docs" },
  { href = "https://github.com/my-org/my-project", label = "GitHub", external = true },
]

# Icons and social cards, relative to the static directory.
# headerIcon = "img/logo.svg"
# footerIcon = "img/logo.svg"
# favicon = "img/favicon.ico"
# ogImage = "img/og.png"
# twitterImage = "img/og.png"

# Extra stylesheets and scripts, loaded in order. Each entry must be an
# absolute http(s) URL; site-local paths like "/css/custom.css" are rejected.
stylesheets = []
scripts = []

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[colors]
primaryColor = "#2e8555"
secondaryColor = "#205d3b"

# Syntax highlighting theme (highlight.js name).
[highlight]
theme = "default"

# Named font stacks.
# [fonts]
# myFont = ["Lato", "Serif"]

# ---------------------------------------------------------------------------
# Search (omit the table to disable)
# ---------------------------------------------------------------------------
# [algolia]
# apiKey = "..."
# indexName = "my-project"
"##
}

/// Convert a camelCase slot name to a CSS custom property suffix.
fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Generate CSS custom properties from the color slots.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in colors.slots() {
        css.push_str(&format!("    --{}: {};\n", kebab_case(name), value));
    }
    css.push('}');
    css
}

/// Generate CSS custom properties from named font stacks.
///
/// Families containing whitespace are quoted.
pub fn generate_font_css(fonts: &BTreeMap<String, Vec<String>>) -> String {
    let mut css = String::from(":root {\n");
    for (name, families) in fonts {
        let stack: Vec<String> = families
            .iter()
            .map(|f| {
                if f.contains(char::is_whitespace) {
                    format!("\"{f}\"")
                } else {
                    f.clone()
                }
            })
            .collect();
        css.push_str(&format!(
            "    --font-{}: {};\n",
            kebab_case(name),
            stack.join(", ")
        ));
    }
    css.push('}');
    css
}
