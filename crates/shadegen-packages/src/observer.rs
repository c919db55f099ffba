//! Progress notifications emitted while computing relocations.

use std::path::Path;

use shadegen_core::artifact::ArtifactDescriptor;
use shadegen_core::package::PackageName;
use shadegen_core::relocation::RelocationRule;

/// Receives progress events from the analysis steps.
///
/// Passed explicitly into each call; all methods default to no-ops.
pub trait Observer {
    /// An artifact passed filtering and will be bundled.
    fn artifact_included(&self, _artifact: &ArtifactDescriptor) {}

    /// An archive is about to be scanned.
    fn scanning(&self, _archive: &Path) {}

    /// Scanning an archive finished.
    fn packages_found(&self, _archive: &Path, _packages: usize) {}

    /// The root collapser emitted a root package.
    fn root_found(&self, _root: &PackageName) {}

    /// The default package was dropped before simplification.
    fn default_package_skipped(&self) {}

    /// `package` was dropped because `container` already covers it.
    fn package_omitted(&self, _package: &PackageName, _container: &PackageName) {}

    /// A relocation rule was produced.
    fn rule_generated(&self, _rule: &RelocationRule) {}
}

/// Ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl Observer for SilentObserver {}

/// Forwards every event to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn artifact_included(&self, artifact: &ArtifactDescriptor) {
        tracing::info!("found dependency [{}]", artifact.coordinates);
    }

    fn scanning(&self, archive: &Path) {
        tracing::info!("searching for packages in [{}]", archive.display());
    }

    fn packages_found(&self, archive: &Path, packages: usize) {
        tracing::debug!("{packages} packages in [{}]", archive.display());
    }

    fn root_found(&self, root: &PackageName) {
        tracing::info!("found root pkg: [{root}]");
    }

    fn default_package_skipped(&self) {
        tracing::warn!("the default package cannot be relocated and will be skipped");
    }

    fn package_omitted(&self, package: &PackageName, container: &PackageName) {
        tracing::info!("package [{package}] will be omitted because it is contained by [{container}]");
    }

    fn rule_generated(&self, rule: &RelocationRule) {
        tracing::debug!("{rule}");
    }
}
