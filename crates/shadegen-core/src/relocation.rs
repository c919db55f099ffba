//! Relocation prefixes and rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shadegen_util::errors::ShadeError;

use crate::java;
use crate::package::PackageName;

/// A validated relocation prefix such as `relocated` or `com.acme.shaded`.
///
/// Stored without its trailing dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelocationPrefix(String);

impl RelocationPrefix {
    /// Validate a user-supplied prefix.
    ///
    /// A single trailing dot is tolerated and stripped. Every remaining
    /// dot-separated segment must be a legal Java identifier.
    pub fn parse(raw: &str) -> Result<Self, ShadeError> {
        if raw.is_empty() {
            return Err(ShadeError::Configuration {
                message: "Relocation prefix cannot be empty".to_string(),
            });
        }

        let prefix = raw.strip_suffix('.').unwrap_or(raw);
        if prefix.is_empty() {
            return Err(ShadeError::Configuration {
                message: format!("Relocation prefix [{raw}] is made only of dots"),
            });
        }

        let invalid: Vec<&str> = prefix
            .split('.')
            .filter(|segment| !java::is_identifier(segment))
            .collect();
        if !invalid.is_empty() {
            let names: Vec<String> = invalid.iter().map(|s| format!("[{s}]")).collect();
            return Err(ShadeError::Configuration {
                message: format!(
                    "Relocation prefix [{raw}] contains invalid package names: {}",
                    names.join(", ")
                ),
            });
        }

        Ok(Self(prefix.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelocationPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RelocationPrefix {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// How discovered packages are collapsed into roots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollapseMode {
    /// Collapse the union of all artifacts' packages at once.
    #[default]
    Union,
    /// Collapse each artifact separately and union the roots.
    PerArtifact,
}

impl FromStr for CollapseMode {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "union" => Ok(Self::Union),
            "per-artifact" => Ok(Self::PerArtifact),
            other => Err(ShadeError::Configuration {
                message: format!("Unknown collapse mode [{other}], expected union or per-artifact"),
            }),
        }
    }
}

/// Maps one source package prefix to its relocated prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelocationRule {
    pub pattern: PackageName,
    pub shaded_pattern: PackageName,
}

impl RelocationRule {
    /// Relocate `pattern` under `prefix`.
    pub fn new(pattern: PackageName, prefix: &RelocationPrefix) -> Self {
        let shaded_pattern = pattern.under(prefix.as_str());
        Self {
            pattern,
            shaded_pattern,
        }
    }
}

impl fmt::Display for RelocationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Relocation from [{}] to [{}]",
            self.pattern, self.shaded_pattern
        )
    }
}
