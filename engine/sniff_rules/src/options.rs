//! Per-module configuration values.
//!
//! A ruleset gives each rule module a flat `key → value` object. Values
//! arrive as JSON scalars or string lists; string forms (`"true"`, `"80"`,
//! `"a, b"`) are accepted too, so values copied from an XML ruleset work
//! unchanged.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// One configuration value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(value) => write!(f, "{value}"),
            OptionValue::Int(value) => write!(f, "{value}"),
            OptionValue::Text(value) => write!(f, "{value:?}"),
            OptionValue::List(values) => write!(f, "{values:?}"),
        }
    }
}

/// A rejected configuration value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionError {
    #[error("option `{key}` expects {expected}, found {found}")]
    Invalid {
        key: String,
        expected: &'static str,
        found: String,
    },

    #[error("unknown option `{key}` (known: {known})")]
    Unknown { key: String, known: String },
}

/// Options for one rule module.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SniffOptions(BTreeMap<String, OptionValue>);

impl SniffOptions {
    pub fn new() -> Self {
        SniffOptions::default()
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: OptionValue) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject keys the module does not define.
    pub fn expect_keys(&self, known: &[&str]) -> Result<(), OptionError> {
        match self.0.keys().find(|key| !known.contains(&key.as_str())) {
            Some(key) => Err(OptionError::Unknown {
                key: key.clone(),
                known: known.join(", "),
            }),
            None => Ok(()),
        }
    }

    pub fn get_u32(&self, key: &str, default: u32) -> Result<u32, OptionError> {
        let Some(value) = self.0.get(key) else {
            return Ok(default);
        };
        let parsed = match value {
            OptionValue::Int(n) => u32::try_from(*n).ok(),
            OptionValue::Text(text) => text.trim().parse().ok(),
            OptionValue::Bool(_) | OptionValue::List(_) => None,
        };
        parsed.ok_or_else(|| invalid(key, "a non-negative integer", value))
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, OptionError> {
        let Some(value) = self.0.get(key) else {
            return Ok(default);
        };
        let parsed = match value {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Text(text) => match text.trim() {
                "true" | "1" => Some(true),
                "false" | "0" => Some(false),
                _ => None,
            },
            OptionValue::Int(n) => Some(*n != 0),
            OptionValue::List(_) => None,
        };
        parsed.ok_or_else(|| invalid(key, "a boolean", value))
    }

    /// A list, given either as an array or as comma-separated text.
    pub fn get_list(&self, key: &str, default: &[&str]) -> Result<Vec<String>, OptionError> {
        let Some(value) = self.0.get(key) else {
            return Ok(default.iter().map(|s| (*s).to_owned()).collect());
        };
        match value {
            OptionValue::List(items) => Ok(items.clone()),
            OptionValue::Text(text) => Ok(text
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect()),
            OptionValue::Bool(_) | OptionValue::Int(_) => {
                Err(invalid(key, "a list of strings", value))
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, OptionValue)> for SniffOptions {
    fn from_iter<I: IntoIterator<Item = (K, OptionValue)>>(iter: I) -> Self {
        SniffOptions(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn invalid(key: &str, expected: &'static str, found: &OptionValue) -> OptionError {
    OptionError::Invalid {
        key: key.to_owned(),
        expected,
        found: found.to_string(),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
