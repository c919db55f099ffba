//! Loading a project: manifest, global config and the derived settings.

use std::path::{Path, PathBuf};

use shadegen_core::artifact::ArtifactDescriptor;
use shadegen_core::config::{GlobalConfig, OutputFormat};
use shadegen_core::manifest::{Manifest, MANIFEST_FILE};
use shadegen_core::relocation::{CollapseMode, RelocationPrefix};
use shadegen_core::DEFAULT_RELOCATION_PREFIX;
use shadegen_util::errors::{ShadeError, ShadeResult};
use shadegen_util::fs::find_ancestor_with;

/// A loaded `Shade.toml` together with the user's global defaults.
#[derive(Debug, Clone)]
pub struct Project {
    pub manifest: Manifest,
    /// Directory holding the manifest; relative artifact paths resolve against it.
    pub root: PathBuf,
    pub global: GlobalConfig,
}

impl Project {
    /// Load the manifest at `manifest_path` and the global config.
    pub fn load(manifest_path: &Path) -> ShadeResult<Self> {
        let manifest = Manifest::from_path(manifest_path)?;
        let root = manifest_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let global = match GlobalConfig::load() {
            Ok(global) => global,
            Err(e) => {
                tracing::warn!("Failed to load global config, using defaults: {e}");
                GlobalConfig::default()
            }
        };
        Ok(Self {
            manifest,
            root,
            global,
        })
    }

    /// The relocation prefix: `cli` override, then manifest, then global config.
    pub fn relocation_prefix(&self, cli: Option<&str>) -> Result<RelocationPrefix, ShadeError> {
        let raw = cli
            .or(self.manifest.relocation.prefix.as_deref())
            .or(self.global.relocation.prefix.as_deref())
            .unwrap_or(DEFAULT_RELOCATION_PREFIX);
        RelocationPrefix::parse(raw)
    }

    pub fn collapse_mode(&self, cli: Option<CollapseMode>) -> CollapseMode {
        cli.or(self.manifest.relocation.collapse).unwrap_or_default()
    }

    pub fn output_format(&self, cli: Option<OutputFormat>) -> OutputFormat {
        cli.unwrap_or(self.global.output.format)
    }

    /// All declared artifacts with their archive locations resolved.
    pub fn artifacts(&self) -> Vec<ArtifactDescriptor> {
        let fallback = self.global.local_repository();
        let local = self.manifest.local_repository(&self.root, &fallback);
        self.manifest.descriptors(&self.root, &local)
    }
}

/// Find the manifest: `explicit` if given, else `Shade.toml` in `start` or an ancestor.
pub fn locate_manifest(explicit: Option<&Path>, start: &Path) -> Result<PathBuf, ShadeError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    find_ancestor_with(start, MANIFEST_FILE)
        .map(|dir| dir.join(MANIFEST_FILE))
        .ok_or_else(|| ShadeError::Manifest {
            message: format!(
                "Could not find {MANIFEST_FILE} in {} or any parent directory",
                start.display()
            ),
        })
}
