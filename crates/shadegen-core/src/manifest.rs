use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shadegen_util::errors::ShadeError;
use shadegen_util::fs::{expand_home, resolve_against};

use crate::artifact::{ArtifactDescriptor, Coordinates, Scope};
use crate::filter::{ArtifactFilter, ArtifactSet};
use crate::relocation::CollapseMode;

/// File name of the project manifest.
pub const MANIFEST_FILE: &str = "Shade.toml";

/// The parsed representation of a `Shade.toml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub relocation: RelocationConfig,

    #[serde(default, rename = "artifact-set")]
    pub artifact_set: ArtifactSetConfig,

    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default, rename = "artifact")]
    pub artifacts: Vec<ArtifactEntry>,
}

/// Settings from `[relocation]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelocationConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub collapse: Option<CollapseMode>,
}

/// Include/exclude coordinate patterns from `[artifact-set]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtifactSetConfig {
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// Repository settings from `[repository]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default)]
    pub local: Option<String>,
}

/// One `[[artifact]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactEntry {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_kind() -> String {
    "jar".to_string()
}

impl ArtifactEntry {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            group: self.group.clone(),
            name: self.name.clone(),
            version: self.version.clone(),
            classifier: self.classifier.clone(),
            kind: self.kind.clone(),
        }
    }
}

impl Manifest {
    /// Parse a manifest from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ShadeError> {
        toml::from_str(content).map_err(|e| ShadeError::Manifest {
            message: format!("Failed to parse manifest: {e}"),
        })
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: &Path) -> Result<Self, ShadeError> {
        let content = std::fs::read_to_string(path).map_err(|e| ShadeError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::parse(&content)
    }

    /// The artifact filter described by `[artifact-set]`.
    pub fn artifact_filter(&self) -> Result<ArtifactFilter, ShadeError> {
        let set = ArtifactSet::parse(&self.artifact_set.includes, &self.artifact_set.excludes)?;
        Ok(ArtifactFilter::new(set))
    }

    /// Local repository root: the manifest's `[repository] local`, else `fallback`.
    pub fn local_repository(&self, base_dir: &Path, fallback: &Path) -> PathBuf {
        match &self.repository.local {
            Some(local) => resolve_against(base_dir, &expand_home(local)),
            None => fallback.to_path_buf(),
        }
    }

    /// Turn every `[[artifact]]` into a descriptor with a concrete archive location.
    ///
    /// Explicit paths are resolved against `base_dir`; the rest are located
    /// in the Maven repository layout under `local_repo`.
    pub fn descriptors(&self, base_dir: &Path, local_repo: &Path) -> Vec<ArtifactDescriptor> {
        self.artifacts
            .iter()
            .map(|entry| {
                let coordinates = entry.coordinates();
                let file = match &entry.path {
                    Some(p) => resolve_against(base_dir, p),
                    None => coordinates.repository_path(local_repo),
                };
                ArtifactDescriptor::new(coordinates, entry.scope, file)
            })
            .collect()
    }
}
