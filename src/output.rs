//! CLI output formatting for a loaded configuration.
//!
//! # Information-First Display
//!
//! The `check` summary is grouped by the collaborator that consumes each part
//! of the configuration: site identity and publishing, header navigation,
//! theming, footer, and search. Each group is a header line followed by
//! indented `Key: value` context lines. Header links are listed with a
//! positional index, the same way the menu renders them.
//!
//! # Output Format
//!
//! ```text
//! Site
//!     Source: siteConfig.toml
//!     Title: Scala 3 Macro Tutorial
//!     Root: https://lampepfl.github.io/scala3-macro-tutorial/
//!     Publish: lampepfl/scala3-macro-tutorial
//!     Docs: mdoc/target/mdoc
//!
//! Header links
//! 001 Tutorial → tutorial/introduction
//! 002 GitHub → https://github.com/lampepfl/scala3-macro-tutorial (external)
//!
//! Theme
//!     primaryColor: #ca445e
//!     secondaryColor: #224951
//!     Highlight: github
//!     Stylesheets: 2
//!     On-page nav: separate
//!
//! Footer
//!     Copyright: Copyright © 2026 LAMP EPFL
//!     Edit URL: https://github.com/lampepfl/scala3-macro-tutorial/edit/master/docs/
//!
//! Search
//!     disabled
//! ```
//!
//! # Architecture
//!
//! [`format_check_output`] returns `Vec<String>` for testability and
//! [`print_check_output`] writes it to stdout. The format function is pure.

use crate::config::SiteConfiguration;
use crate::types::{ImagesConfig, NavigationLink};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// An indented `Key: value` context line.
fn detail(key: &str, value: impl std::fmt::Display) -> String {
    format!("{}{}: {}", indent(1), key, value)
}

/// Format a header link: index, label, and target.
///
/// ```text
/// 001 Tutorial → tutorial/introduction
/// 002 GitHub → https://github.com/x (external)
/// ```
fn link_line(index: usize, link: &NavigationLink) -> String {
    let suffix = if link.is_external() { " (external)" } else { "" };
    format!(
        "{} {} → {}{}",
        format_index(index),
        link.label(),
        link.target(),
        suffix
    )
}

/// Icon slots that are set, as `key path` pairs.
fn image_lines(images: &ImagesConfig) -> Vec<String> {
    let slots = [
        ("headerIcon", images.header_icon()),
        ("footerIcon", images.footer_icon()),
        ("favicon", images.favicon()),
        ("ogImage", images.og_image()),
        ("twitterImage", images.twitter_image()),
    ];
    slots
        .into_iter()
        .filter_map(|(key, path)| path.map(|p| detail(key, p)))
        .collect()
}

/// Format the `check` summary for a successfully loaded configuration.
pub fn format_check_output(config: &SiteConfiguration, config_path: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Site".to_string());
    lines.push(detail("Source", config_path.display()));
    lines.push(detail("Title", config.title()));
    if !config.tagline().is_empty() {
        lines.push(detail("Tagline", config.tagline()));
    }
    lines.push(detail("Root", config.site_root()));
    lines.push(detail(
        "Publish",
        format!("{}/{}", config.organization_name(), config.project_name()),
    ));
    lines.push(detail("Docs", config.custom_docs_path()));

    lines.push(String::new());
    lines.push("Header links".to_string());
    if config.header_links().is_empty() {
        lines.push(format!("{}none", indent(1)));
    }
    for (i, link) in config.header_links().iter().enumerate() {
        lines.push(link_line(i + 1, link));
    }

    lines.push(String::new());
    lines.push("Theme".to_string());
    for (name, value) in config.colors().slots() {
        lines.push(detail(name, value));
    }
    lines.push(detail("Highlight", config.highlight().theme()));
    if !config.fonts().is_empty() {
        let names: Vec<&str> = config.fonts().keys().map(String::as_str).collect();
        lines.push(detail("Fonts", names.join(", ")));
    }
    lines.push(detail("Stylesheets", config.stylesheets().len()));
    if !config.scripts().is_empty() {
        lines.push(detail("Scripts", config.scripts().len()));
    }
    lines.push(detail("On-page nav", config.on_page_nav().as_str()));

    lines.push(String::new());
    lines.push("Footer".to_string());
    if !config.copyright().is_empty() {
        lines.push(detail("Copyright", config.copyright()));
    }
    if let Some(url) = config.edit_url() {
        lines.push(detail("Edit URL", url));
    }
    if let Some(url) = config.repo_url() {
        lines.push(detail("Repository", url));
    }
    lines.extend(image_lines(config.images()));

    lines.push(String::new());
    lines.push("Search".to_string());
    match config.algolia() {
        Some(algolia) => lines.push(detail("Algolia index", algolia.index_name())),
        None => lines.push(format!("{}disabled", indent(1))),
    }

    lines
}

pub fn print_check_output(config: &SiteConfiguration, config_path: &Path) {
    for line in format_check_output(config, config_path) {
        println!("{}", line);
    }
}
