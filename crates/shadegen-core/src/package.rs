//! Java package names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shadegen_util::errors::ShadeError;

/// A fully qualified Java package name such as `com.google.common`.
///
/// Stored in its dotted form; every segment is non-empty. The empty name is
/// the unnamed (default) package. Ordering is the lexical order of the
/// dotted form.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// The unnamed (default) package.
    pub fn default_package() -> Self {
        Self(String::new())
    }

    /// Parse a dotted package name. The empty string is the default package.
    pub fn parse(s: &str) -> Result<Self, ShadeError> {
        if !s.is_empty() && s.split('.').any(str::is_empty) {
            return Err(ShadeError::Generic {
                message: format!("Invalid package name [{s}]: empty segment"),
            });
        }
        Ok(Self(s.to_string()))
    }

    /// Build a package name from an archive directory path (`com/foo` -> `com.foo`).
    ///
    /// Empty path components are ignored, so the archive root maps to the
    /// default package.
    pub fn from_dir_path(dir: &str) -> Self {
        let segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
        Self(segments.join("."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    /// The ancestor made of the first `depth` segments (or `self` if it is shallower).
    pub fn prefix(&self, depth: usize) -> Self {
        if depth == 0 {
            return Self::default_package();
        }
        match self.0.match_indices('.').nth(depth - 1) {
            Some((idx, _)) => Self(self.0[..idx].to_string()),
            None => self.clone(),
        }
    }

    /// `true` if `self` lies strictly below `ancestor`, i.e. `self` starts
    /// with `ancestor` followed by a dot.
    pub fn is_descendant_of(&self, ancestor: &PackageName) -> bool {
        let a = ancestor.as_str();
        self.0.len() > a.len() && self.0.starts_with(a) && self.0.as_bytes()[a.len()] == b'.'
    }

    /// Prepend `prefix` to this name (`prefix.self`).
    pub fn under(&self, prefix: &str) -> Self {
        if self.is_default() {
            Self(prefix.to_string())
        } else {
            Self(format!("{prefix}.{}", self.0))
        }
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageName {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PackageName {
    type Error = ShadeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PackageName> for String {
    fn from(p: PackageName) -> Self {
        p.0
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
