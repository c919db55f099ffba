//! Artifact coordinates and descriptors.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Maven-compatible dependency scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Compile,
    Runtime,
    Provided,
    System,
    Test,
}

/// Full Maven coordinates of one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub group: String,
    pub name: String,
    pub version: String,
    pub classifier: Option<String>,
    /// Packaging type, e.g. `jar` or `pom`.
    pub kind: String,
}

impl Coordinates {
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            classifier: None,
            kind: "jar".to_string(),
        }
    }

    /// The `group:name` key used in the shade plugin's `<include>` list.
    pub fn key(&self) -> String {
        format!("{}:{}", self.group, self.name)
    }

    /// File extension for this packaging type.
    pub fn extension(&self) -> &str {
        match self.kind.to_ascii_lowercase().as_str() {
            "jar" | "test-jar" | "bundle" | "maven-plugin" => "jar",
            _ => &self.kind,
        }
    }

    /// Location of this artifact inside a Maven repository layout rooted at `repo`.
    pub fn repository_path(&self, repo: &Path) -> PathBuf {
        let filename = match &self.classifier {
            Some(c) => format!("{}-{}-{c}.{}", self.name, self.version, self.extension()),
            None => format!("{}-{}.{}", self.name, self.version, self.extension()),
        };
        repo.join(self.group.replace('.', "/"))
            .join(&self.name)
            .join(&self.version)
            .join(filename)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.kind)?;
        if let Some(c) = &self.classifier {
            write!(f, ":{c}")?;
        }
        write!(f, ":{}", self.version)
    }
}

/// One dependency to bundle: its coordinates, scope and archive location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub coordinates: Coordinates,
    pub scope: Scope,
    pub file: PathBuf,
}

impl ArtifactDescriptor {
    pub fn new(coordinates: Coordinates, scope: Scope, file: impl Into<PathBuf>) -> Self {
        Self {
            coordinates,
            scope,
            file: file.into(),
        }
    }
}

impl fmt::Display for ArtifactDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.coordinates, self.file.display())
    }
}
