//! Operation: list the packages discovered in each bundled artifact.

use std::collections::BTreeSet;
use std::path::Path;

use shadegen_core::artifact::ArtifactDescriptor;
use shadegen_core::package::PackageName;
use shadegen_packages::observer::Observer;
use shadegen_packages::roots::root_packages;
use shadegen_packages::scanner::scan_packages;
use shadegen_util::errors::ShadeResult;

use crate::project::Project;

/// Packages found in one artifact.
#[derive(Debug, Clone)]
pub struct ArtifactPackages {
    pub artifact: ArtifactDescriptor,
    pub packages: BTreeSet<PackageName>,
}

/// Scan every included artifact of the project. With `roots`, each
/// artifact's packages are collapsed to their root packages.
pub fn packages(
    manifest_path: &Path,
    roots: bool,
    observer: &dyn Observer,
) -> ShadeResult<Vec<ArtifactPackages>> {
    let project = Project::load(manifest_path)?;
    let filter = project.manifest.artifact_filter()?;
    let artifacts = project.artifacts();

    let mut result = Vec::new();
    for artifact in filter.apply(&artifacts) {
        observer.artifact_included(artifact);
        let mut packages = scan_packages(&artifact.file, observer)?;
        if roots {
            packages = root_packages(&packages, observer);
        }
        result.push(ArtifactPackages {
            artifact: artifact.clone(),
            packages,
        });
    }
    Ok(result)
}
