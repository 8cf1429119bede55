//! Typed values produced by the loader and handed to downstream collaborators.
//!
//! Everything here is constructed by [`crate::config::load`] and exposed
//! read-only. Serialization mirrors the input key names so `show` output can
//! be fed back into the loader.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use url::Url;

/// An entry in the site's top-level header menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavigationLink {
    /// Points at a document by id. Resolution is left to the doc build.
    Doc(DocLink),
    /// Points at an absolute URL outside the site.
    External(ExternalLink),
}

impl NavigationLink {
    pub fn label(&self) -> &str {
        match self {
            NavigationLink::Doc(link) => &link.label,
            NavigationLink::External(link) => &link.label,
        }
    }

    /// Link target as written: the doc id or the external URL.
    pub fn target(&self) -> &str {
        match self {
            NavigationLink::Doc(link) => &link.doc,
            NavigationLink::External(link) => link.href.as_str(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, NavigationLink::External(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocLink {
    pub(crate) doc: String,
    pub(crate) label: String,
}

impl DocLink {
    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub(crate) href: Url,
    pub(crate) label: String,
}

impl ExternalLink {
    pub fn href(&self) -> &Url {
        &self.href
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

// `external = true` is implied by the variant, so it is written back out
// rather than stored.
impl Serialize for ExternalLink {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ExternalLink", 3)?;
        s.serialize_field("href", self.href.as_str())?;
        s.serialize_field("label", &self.label)?;
        s.serialize_field("external", &true)?;
        s.end()
    }
}

/// Named color slots for the theming collaborator.
///
/// `primaryColor` and `secondaryColor` always exist; any other slot named in
/// the `[colors]` table is kept in `extra`, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorConfig {
    pub(crate) primary_color: String,
    pub(crate) secondary_color: String,
    #[serde(flatten)]
    pub(crate) extra: BTreeMap<String, String>,
}

impl ColorConfig {
    pub fn primary_color(&self) -> &str {
        &self.primary_color
    }

    pub fn secondary_color(&self) -> &str {
        &self.secondary_color
    }

    /// Additional slots beyond primary/secondary.
    pub fn extra(&self) -> &BTreeMap<String, String> {
        &self.extra
    }

    /// All slots in output order: primary, secondary, then extras by name.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            ("primaryColor", self.primary_color.as_str()),
            ("secondaryColor", self.secondary_color.as_str()),
        ]
        .into_iter()
        .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary_color: "#2e8555".to_string(),
            secondary_color: "#205d3b".to_string(),
            extra: BTreeMap::new(),
        }
    }
}

/// Syntax highlighting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    pub(crate) theme: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) default_lang: Option<String>,
}

impl HighlightConfig {
    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn default_lang(&self) -> Option<&str> {
        self.default_lang.as_deref()
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            default_lang: None,
        }
    }
}

/// highlight.js themes the theming collaborator ships.
pub const HIGHLIGHT_THEMES: &[&str] = &[
    "a11y-dark",
    "a11y-light",
    "atom-one-dark",
    "atom-one-light",
    "default",
    "dracula",
    "github",
    "github-dark",
    "googlecode",
    "idea",
    "monokai",
    "monokai-sublime",
    "nord",
    "obsidian",
    "solarized-dark",
    "solarized-light",
    "tomorrow",
    "tomorrow-night",
    "vs",
    "vs2015",
    "xcode",
    "zenburn",
];

/// How the per-page table of contents is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OnPageNav {
    /// Rendered in a separate column next to the document.
    Separate,
    /// Not rendered.
    #[default]
    None,
}

impl OnPageNav {
    pub const VALUES: &'static [&'static str] = &["separate", "none"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "separate" => Some(OnPageNav::Separate),
            "none" => Some(OnPageNav::None),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OnPageNav::Separate => "separate",
            OnPageNav::None => "none",
        }
    }
}

/// Icon and social-card image paths, relative to the static assets root.
///
/// These are flat top-level keys in `siteConfig.toml`; they are grouped here
/// because the header/footer renderer consumes them together.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagesConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) header_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) footer_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) favicon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) og_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) twitter_image: Option<String>,
}

impl ImagesConfig {
    /// Input keys, in the order they are read.
    pub const KEYS: &'static [&'static str] = &[
        "headerIcon",
        "footerIcon",
        "favicon",
        "ogImage",
        "twitterImage",
    ];

    pub fn header_icon(&self) -> Option<&str> {
        self.header_icon.as_deref()
    }

    pub fn footer_icon(&self) -> Option<&str> {
        self.footer_icon.as_deref()
    }

    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    pub fn og_image(&self) -> Option<&str> {
        self.og_image.as_deref()
    }

    pub fn twitter_image(&self) -> Option<&str> {
        self.twitter_image.as_deref()
    }

    pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "headerIcon" => Some(&mut self.header_icon),
            "footerIcon" => Some(&mut self.footer_icon),
            "favicon" => Some(&mut self.favicon),
            "ogImage" => Some(&mut self.og_image),
            "twitterImage" => Some(&mut self.twitter_image),
            _ => None,
        }
    }
}

/// Search-indexing integration. Present only when the `[algolia]` table is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgoliaConfig {
    pub(crate) api_key: String,
    pub(crate) index_name: String,
}

impl AlgoliaConfig {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_link_serializes_external_flag() {
        let link = NavigationLink::External(ExternalLink {
            href: Url::parse("https://github.com/x").unwrap(),
            label: "GitHub".to_string(),
        });
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["href"], "https://github.com/x");
        assert_eq!(json["label"], "GitHub");
        assert_eq!(json["external"], true);
    }

    #[test]
    fn doc_link_serializes_without_external_flag() {
        let link = NavigationLink::Doc(DocLink {
            doc: "intro".to_string(),
            label: "Tutorial".to_string(),
        });
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(json["doc"], "intro");
        assert!(json.get("external").is_none());
    }

    #[test]
    fn navigation_link_accessors() {
        let doc = NavigationLink::Doc(DocLink {
            doc: "contributing".to_string(),
            label: "Contribute".to_string(),
        });
        assert_eq!(doc.label(), "Contribute");
        assert_eq!(doc.target(), "contributing");
        assert!(!doc.is_external());
    }

    #[test]
    fn color_slots_order_primary_secondary_then_extras() {
        let mut colors = ColorConfig::default();
        colors.extra.insert("zAccent".into(), "#000".into());
        colors.extra.insert("aAccent".into(), "#fff".into());
        let names: Vec<&str> = colors.slots().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec!["primaryColor", "secondaryColor", "aAccent", "zAccent"]
        );
    }

    #[test]
    fn color_config_flattens_extras() {
        let mut colors = ColorConfig::default();
        colors.extra.insert("tintColor".into(), "#abc".into());
        let json = serde_json::to_value(&colors).unwrap();
        assert_eq!(json["primaryColor"], "#2e8555");
        assert_eq!(json["tintColor"], "#abc");
    }

    #[test]
    fn on_page_nav_parse() {
        assert_eq!(OnPageNav::parse("separate"), Some(OnPageNav::Separate));
        assert_eq!(OnPageNav::parse("none"), Some(OnPageNav::None));
        assert_eq!(OnPageNav::parse("inline"), None);
        assert_eq!(OnPageNav::default(), OnPageNav::None);
    }

    #[test]
    fn on_page_nav_values_roundtrip() {
        for value in OnPageNav::VALUES {
            assert_eq!(OnPageNav::parse(value).unwrap().as_str(), *value);
        }
    }

    #[test]
    fn highlight_default_theme_is_known() {
        assert!(HIGHLIGHT_THEMES.contains(&HighlightConfig::default().theme()));
    }

    #[test]
    fn image_slots_cover_all_keys() {
        let mut images = ImagesConfig::default();
        for key in ImagesConfig::KEYS {
            *images.slot_mut(key).unwrap() = Some(format!("img/{key}.svg"));
        }
        assert_eq!(images.favicon(), Some("img/favicon.svg"));
        assert_eq!(images.twitter_image(), Some("img/twitterImage.svg"));
        assert!(images.slot_mut("logo").is_none());
    }
}
