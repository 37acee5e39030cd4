use crate::utils::error::{PcsError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Constraints checked by [`validate_string`].
///
/// `max_length: None` means unbounded. An empty `regex` or `options` is not
/// checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringConstraints {
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub regex: Option<String>,
    pub options: Vec<String>,
    pub nullable: bool,
}

impl StringConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn length(self, min_length: usize, max_length: usize) -> Self {
        self.min_length(min_length).max_length(max_length)
    }

    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.regex = Some(pattern.into());
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Compiles the configured pattern anchored to the whole input.
    /// Whitespace inside the pattern is ignored so long patterns may be
    /// wrapped over several lines.
    pub fn compiled_regex(&self) -> Result<Option<Regex>> {
        let Some(pattern) = self.regex.as_deref() else {
            return Ok(None);
        };
        let stripped: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.is_empty() {
            return Ok(None);
        }
        Ok(Some(Regex::new(&format!(r"\A(?:{})\z", stripped))?))
    }
}

/// Inclusive bounds checked by [`validate_number`]. Missing bounds are
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberConstraints<T> {
    pub min: Option<T>,
    pub max: Option<T>,
    #[serde(default)]
    pub nullable: bool,
}

impl<T> Default for NumberConstraints<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            nullable: false,
        }
    }
}

impl<T> NumberConstraints<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    pub fn range(self, min: T, max: T) -> Self {
        self.min(min).max(max)
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }
}

pub fn validate_string(value: Option<&str>, constraints: &StringConstraints) -> Result<()> {
    validate_string_with(value, constraints, |_| PcsError::invalid_value(value))
}

/// Same checks as [`validate_string`], with `on_invalid` building the error
/// returned when a constraint is violated. A pattern that does not compile
/// is still reported as [`PcsError::InvalidPattern`].
pub fn validate_string_with<E, F>(
    value: Option<&str>,
    constraints: &StringConstraints,
    on_invalid: F,
) -> std::result::Result<(), E>
where
    E: From<PcsError>,
    F: FnOnce(Option<&str>) -> E,
{
    let Some(string) = value else {
        if constraints.nullable {
            return Ok(());
        }
        tracing::trace!("null value rejected");
        return Err(on_invalid(None));
    };

    let mut valid = true;

    if !constraints.options.is_empty() && !constraints.options.iter().any(|o| o == string) {
        tracing::trace!("'{}' is not one of {:?}", string, constraints.options);
        valid = false;
    }

    let length = string.chars().count();
    if length < constraints.min_length || constraints.max_length.is_some_and(|max| length > max) {
        tracing::trace!("'{}' has length {} outside bounds", string, length);
        valid = false;
    }

    if let Some(re) = constraints.compiled_regex().map_err(E::from)? {
        if !re.is_match(string) {
            tracing::trace!("'{}' does not match {}", string, re.as_str());
            valid = false;
        }
    }

    if valid {
        Ok(())
    } else {
        Err(on_invalid(Some(string)))
    }
}

pub fn validate_number<T>(value: Option<T>, constraints: &NumberConstraints<T>) -> Result<()>
where
    T: PartialOrd + Display + Copy,
{
    validate_number_with(value, constraints, |v| {
        PcsError::InvalidValue {
            value: v.map(|n| n.to_string()),
        }
    })
}

pub fn validate_number_with<T, E, F>(
    value: Option<T>,
    constraints: &NumberConstraints<T>,
    on_invalid: F,
) -> std::result::Result<(), E>
where
    T: PartialOrd + Display + Copy,
    F: FnOnce(Option<T>) -> E,
{
    let Some(number) = value else {
        return if constraints.nullable {
            Ok(())
        } else {
            Err(on_invalid(None))
        };
    };

    let below = constraints.min.is_some_and(|min| number < min);
    let above = constraints.max.is_some_and(|max| number > max);
    if below || above {
        tracing::trace!("{} is outside the allowed range", number);
        return Err(on_invalid(Some(number)));
    }
    Ok(())
}

/// Checks that the link scraped into `field_name` is an absolute http(s) URL.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    let invalid = |reason: String| PcsError::InvalidUrl {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    if url_str.trim().is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    let url = Url::parse(url_str).map_err(|e| {
        tracing::debug!("cannot parse {} URL '{}': {}", field_name, url_str, e);
        invalid(format!("Invalid URL format: {}", e))
    })?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        "http" | "https" => Err(invalid("URL has no host".to_string())),
        scheme => Err(invalid(format!("Unsupported URL scheme: {}", scheme))),
    }
}
