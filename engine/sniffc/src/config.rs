//! Ruleset configuration.
//!
//! A ruleset is a JSON file:
//!
//! ```json
//! {
//!   "tabWidth": 4,
//!   "maxPasses": 10,
//!   "sniffs": {
//!     "BigBite.Commenting.DocCommentLineLength": { "lineLimit": 100 },
//!     "BigBite.Files.FileName": {}
//!   },
//!   "exclude": ["BigBite.Files.FileName.InvalidClassFileName"],
//!   "severity": { "BigBite.PHP.Heredoc": "warning" }
//! }
//! ```
//!
//! Every key is optional. An empty or missing `sniffs` object enables every
//! built-in rule module with default options. `exclude` entries naming a
//! whole rule module (or a broader prefix) keep it from being registered;
//! narrower entries switch off single codes.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sniff_diagnostic::{code_matches, SeverityOverride, SeverityOverrides};
use sniff_rules::bigbite::{self, BUILTIN};
use sniff_rules::{OptionError, SniffOptions, SniffRegistry};

/// Default ceiling on fixing passes per file.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Failure to load or apply a ruleset.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read ruleset '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid ruleset '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown sniff `{code}` in ruleset")]
    UnknownSniff { code: String },

    #[error("sniff `{code}`: {source}")]
    Options {
        code: String,
        #[source]
        source: OptionError,
    },

    #[error("`maxPasses` must be at least 1")]
    ZeroPasses,
}

/// Severity configured for a code prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    Error,
    Warning,
    Off,
}

impl From<SeverityLevel> for SeverityOverride {
    fn from(level: SeverityLevel) -> Self {
        match level {
            SeverityLevel::Error => SeverityOverride::Error,
            SeverityLevel::Warning => SeverityOverride::Warning,
            SeverityLevel::Off => SeverityOverride::Off,
        }
    }
}

/// A parsed ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Ruleset {
    pub tab_width: u32,
    pub max_passes: usize,
    /// Enabled rule modules and their options, by module code.
    pub sniffs: BTreeMap<String, SniffOptions>,
    /// Code prefixes to leave out.
    pub exclude: Vec<String>,
    /// Severity overrides by code prefix.
    pub severity: BTreeMap<String, SeverityLevel>,
}

impl Default for Ruleset {
    fn default() -> Self {
        Ruleset {
            tab_width: 4,
            max_passes: DEFAULT_MAX_PASSES,
            sniffs: BTreeMap::new(),
            exclude: Vec::new(),
            severity: BTreeMap::new(),
        }
    }
}

impl Ruleset {
    /// Read a ruleset file that must exist.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load a ruleset file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match Self::read(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no ruleset file, using defaults");
                Ok(Ruleset::default())
            }
            result => result,
        }
    }

    /// Parse ruleset JSON; `path` only labels errors.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let ruleset: Ruleset =
            serde_json::from_str(text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        if ruleset.max_passes == 0 {
            return Err(ConfigError::ZeroPasses);
        }
        Ok(ruleset)
    }

    fn excludes_module(&self, code: &str) -> bool {
        self.exclude.iter().any(|prefix| code_matches(prefix, code))
    }

    /// Build the registry of enabled rule modules, in built-in order.
    pub fn registry(&self) -> Result<SniffRegistry, ConfigError> {
        if let Some(code) = self.sniffs.keys().find(|c| !BUILTIN.contains(&c.as_str())) {
            return Err(ConfigError::UnknownSniff { code: code.clone() });
        }
        let default_options = SniffOptions::new();
        let mut registry = SniffRegistry::new();
        for &code in BUILTIN {
            let options = match self.sniffs.get(code) {
                Some(options) => options,
                None if self.sniffs.is_empty() => &default_options,
                None => continue,
            };
            if self.excludes_module(code) {
                tracing::debug!(code, "sniff excluded by ruleset");
                continue;
            }
            let sniff = bigbite::builtin(code, options)
                .map_err(|source| ConfigError::Options {
                    code: code.to_owned(),
                    source,
                })?
                .ok_or_else(|| ConfigError::UnknownSniff {
                    code: code.to_owned(),
                })?;
            registry.register(sniff);
        }
        Ok(registry)
    }

    /// Severity overrides, with narrow excludes switched off.
    pub fn overrides(&self) -> SeverityOverrides {
        let mut overrides = SeverityOverrides::new();
        for (prefix, level) in &self.severity {
            overrides.insert(prefix.clone(), (*level).into());
        }
        for prefix in &self.exclude {
            overrides.insert(prefix.clone(), SeverityOverride::Off);
        }
        overrides
    }
}
