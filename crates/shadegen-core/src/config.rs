use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use shadegen_util::errors::ShadeError;
use shadegen_util::fs::{expand_home, home_dir};

/// Global user configuration loaded from `~/.shadegen/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub relocation: RelocationDefaults,

    #[serde(default)]
    pub repository: RepositoryDefaults,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults from `[relocation]` in global config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelocationDefaults {
    #[serde(default)]
    pub prefix: Option<String>,
}

/// Defaults from `[repository]` in global config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryDefaults {
    #[serde(default = "default_local_repository")]
    pub local: String,
}

impl Default for RepositoryDefaults {
    fn default() -> Self {
        Self {
            local: default_local_repository(),
        }
    }
}

fn default_local_repository() -> String {
    "~/.m2/repository".to_string()
}

/// Output settings from `[output]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering format of the generated configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml => f.write_str("xml"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(Self::Xml),
            "json" => Ok(Self::Json),
            other => Err(ShadeError::Configuration {
                message: format!("Unknown output format [{other}], expected xml or json"),
            }),
        }
    }
}

impl GlobalConfig {
    /// Load the global configuration from `~/.shadegen/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> Result<Self, ShadeError> {
        let path = Self::default_path();
        if path.is_file() {
            let content = std::fs::read_to_string(&path).map_err(|e| ShadeError::Manifest {
                message: format!("Failed to read global config: {e}"),
            })?;
            toml::from_str(&content).map_err(|e| ShadeError::Manifest {
                message: format!("Failed to parse global config: {e}"),
            })
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// The configured local Maven repository, with `~` expanded.
    pub fn local_repository(&self) -> PathBuf {
        expand_home(&self.repository.local)
    }
}

/// Returns the path to the shadegen data directory (`~/.shadegen/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".shadegen")
}
