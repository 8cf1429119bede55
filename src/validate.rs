//! Field-level checks for the site configuration schema.
//!
//! The loader walks the raw `toml::Value` with [`Fields`], pulling known keys
//! out of each table and handing the values to the validators below. Every
//! helper takes the dotted field path so errors name exactly what was wrong,
//! e.g. `headerLinks[2].href` or `colors.primaryColor`.

use crate::config::ConfigValidationError;
use regex::Regex;
use std::sync::LazyLock;
use toml::{Table, Value};
use url::Url;

type Result<T> = std::result::Result<T, ConfigValidationError>;

/// Join a parent path and a key: `colors` + `primaryColor` → `colors.primaryColor`.
pub(crate) fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

// =============================================================================
// Primitive type checks
// =============================================================================

pub(crate) fn as_str<'a>(field: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| ConfigValidationError::wrong_type(field, "string", value))
}

pub(crate) fn as_table<'a>(field: &str, value: &'a Value) -> Result<&'a Table> {
    value
        .as_table()
        .ok_or_else(|| ConfigValidationError::wrong_type(field, "table", value))
}

pub(crate) fn as_array<'a>(field: &str, value: &'a Value) -> Result<&'a [Value]> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ConfigValidationError::wrong_type(field, "array", value))
}

pub(crate) fn as_bool(field: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| ConfigValidationError::wrong_type(field, "boolean", value))
}

/// Read an array of strings, naming each element `field[i]` on error.
pub(crate) fn as_str_array<'a>(field: &str, value: &'a Value) -> Result<Vec<&'a str>> {
    as_array(field, value)?
        .iter()
        .enumerate()
        .map(|(i, item)| as_str(&format!("{field}[{i}]"), item))
        .collect()
}

// =============================================================================
// Table reader
// =============================================================================

/// Reads known keys out of a table and remembers which ones were asked for,
/// so anything left over can be rejected as unknown.
pub(crate) struct Fields<'a> {
    prefix: String,
    table: &'a Table,
    seen: Vec<&'static str>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(prefix: impl Into<String>, table: &'a Table) -> Self {
        Self {
            prefix: prefix.into(),
            table,
            seen: Vec::new(),
        }
    }

    pub(crate) fn path(&self, key: &str) -> String {
        join(&self.prefix, key)
    }

    pub(crate) fn get(&mut self, key: &'static str) -> Option<&'a Value> {
        self.seen.push(key);
        self.table.get(key)
    }

    pub(crate) fn has(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    pub(crate) fn required(&mut self, key: &'static str) -> Result<&'a Value> {
        self.get(key)
            .ok_or_else(|| ConfigValidationError::missing(self.path(key)))
    }

    pub(crate) fn required_str(&mut self, key: &'static str) -> Result<&'a str> {
        let value = self.required(key)?;
        as_str(&self.path(key), value)
    }

    pub(crate) fn optional_str(&mut self, key: &'static str) -> Result<Option<&'a str>> {
        match self.get(key) {
            Some(value) => as_str(&self.path(key), value).map(Some),
            None => Ok(None),
        }
    }

    /// Fail on the first key that was never asked for.
    pub(crate) fn deny_unknown(&self) -> Result<()> {
        match self
            .table
            .keys()
            .find(|key| !self.seen.contains(&key.as_str()))
        {
            Some(key) => Err(ConfigValidationError::unknown_key(self.path(key))),
            None => Ok(()),
        }
    }

    /// Keys that were never asked for, in table order.
    pub(crate) fn rest(&self) -> impl Iterator<Item = (&'a String, &'a Value)> + '_ {
        self.table
            .iter()
            .filter(|(key, _)| !self.seen.contains(&key.as_str()))
    }
}

// =============================================================================
// Format checks
// =============================================================================

pub(crate) fn non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ConfigValidationError::format(field, "must not be empty"));
    }
    Ok(value)
}

/// Deployment identifiers (`projectName`, `organizationName`) end up in
/// repository slugs and branch names.
pub(crate) fn identifier<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    non_empty(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigValidationError::format(
            field,
            format!("`{value}` must not contain whitespace"),
        ));
    }
    Ok(value)
}

/// Any URL with a scheme, e.g. `https://...` or `mailto:...`.
pub(crate) fn url(field: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| {
        ConfigValidationError::format(field, format!("invalid URL `{value}`: {e}"))
    })
}

/// An absolute `http`/`https` URL with a host.
pub(crate) fn absolute_url(field: &str, value: &str) -> Result<Url> {
    let parsed = url(field, value)?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigValidationError::format(
            field,
            format!(
                "scheme `{}` not supported, must be http or https",
                parsed.scheme()
            ),
        ));
    }
    if parsed.host_str().is_none() {
        return Err(ConfigValidationError::format(
            field,
            "URL must have a host",
        ));
    }
    Ok(parsed)
}

/// A root-relative path that both starts and ends with `/`.
pub(crate) fn base_url<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if !value.starts_with('/') {
        return Err(ConfigValidationError::format(
            field,
            format!("`{value}` must start with `/`"),
        ));
    }
    if !value.ends_with('/') {
        return Err(ConfigValidationError::format(
            field,
            format!("`{value}` must end with `/`"),
        ));
    }
    Ok(value)
}

/// A path relative to the site's static directory, e.g. `img/logo.svg`.
pub(crate) fn relative_path<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    non_empty(field, value)?;
    if value.contains("://") {
        return Err(ConfigValidationError::format(
            field,
            format!("`{value}` must be a relative path, not a URL"),
        ));
    }
    if value.starts_with('/') {
        return Err(ConfigValidationError::format(
            field,
            format!("`{value}` must be relative, without a leading `/`"),
        ));
    }
    Ok(value)
}

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static FUNCTIONAL_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:rgba?|hsla?|hwb|lab|lch|oklab|oklch)\([^()]+\)$").unwrap()
});

static NAMED_COLOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// Hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional (`rgb(...)`,
/// `hsl(...)`, ...) or a bare keyword (`rebeccapurple`, `transparent`).
pub(crate) fn css_color<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if HEX_COLOR.is_match(trimmed)
        || FUNCTIONAL_COLOR.is_match(trimmed)
        || NAMED_COLOR.is_match(trimmed)
    {
        Ok(value)
    } else {
        Err(ConfigValidationError::format(
            field,
            format!("`{value}` is not a CSS color"),
        ))
    }
}

/// Membership in a fixed set of allowed values.
pub(crate) fn one_of<'a>(field: &str, value: &'a str, allowed: &[&str]) -> Result<&'a str> {
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigValidationError::format(
            field,
            format!("`{value}` is not one of: {}", allowed.join(", ")),
        ))
    }
}
