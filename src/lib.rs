//! # docsite-config
//!
//! Loads and validates the site configuration of a documentation website:
//! title, URLs, header navigation, theming, and footer metadata. The result is
//! an immutable, typed [`config::SiteConfiguration`] that the rest of a build
//! (page rendering, navigation, theming, publishing) reads without
//! re-validating anything.
//!
//! # Data Flow
//!
//! ```text
//! siteConfig.toml ─┐
//!                  ├─ merge_toml ─→ toml::Value ─→ load ─→ SiteConfiguration ─→ collaborators
//! DOCSITE_* env  ──┘
//! ```
//!
//! Loading is a single synchronous pass. The first invalid field stops it and
//! is reported with its full path (`headerLinks[1].href`), so a broken config
//! never produces a partially valid site.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `siteConfig.toml` loading, env overrides, validation, stock config, CSS variables |
//! | [`types`] | Typed sections handed to collaborators (`NavigationLink`, `ColorConfig`, ...) |
//! | [`output`] | CLI output formatting for the `check` command |
//!
//! # Design Decisions
//!
//! ## Explicit Schema Walk Over Serde Derive
//!
//! Each key is read out of the raw `toml::Value` by hand instead of deriving
//! `Deserialize`. That keeps the error taxonomy precise: a missing key, a
//! value of the wrong type, and a well-typed but malformed value are different
//! [`config::ConfigValidationError`] variants, each carrying the field path.
//!
//! ## No Global Config
//!
//! There is no process-wide config handle. The binary loads one
//! `SiteConfiguration` and passes it by reference. It is `Send + Sync` and has
//! no interior mutability, so parallel readers need no locking.
//!
//! ## Year Substitution at Load Time
//!
//! `copyright` may contain `{year}`, resolved from the wall clock on every
//! load. [`config::load_with_year`] takes the year explicitly for tests.

pub mod config;
pub mod output;
pub mod types;
mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
