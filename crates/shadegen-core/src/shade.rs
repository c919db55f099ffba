use serde::{Deserialize, Serialize};

use crate::artifact::ArtifactDescriptor;
use crate::relocation::RelocationRule;

/// Everything the shade plugin needs: which artifacts to bundle and how to relocate them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeConfiguration {
    /// `group:name` keys of the bundled artifacts, in dependency order.
    pub includes: Vec<String>,
    pub relocations: Vec<RelocationRule>,
}

impl ShadeConfiguration {
    /// Build from the included artifacts; repeated `group:name` keys are listed once.
    pub fn new<'a, I>(artifacts: I, relocations: Vec<RelocationRule>) -> Self
    where
        I: IntoIterator<Item = &'a ArtifactDescriptor>,
    {
        let mut includes: Vec<String> = Vec::new();
        for artifact in artifacts {
            let key = artifact.coordinates.key();
            if !includes.contains(&key) {
                includes.push(key);
            }
        }
        Self {
            includes,
            relocations,
        }
    }
}
