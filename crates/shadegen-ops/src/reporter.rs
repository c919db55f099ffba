//! Console reporting for the analysis.

use std::path::Path;

use shadegen_core::artifact::ArtifactDescriptor;
use shadegen_core::package::PackageName;
use shadegen_core::relocation::RelocationRule;
use shadegen_packages::observer::{Observer, TracingObserver};
use shadegen_util::progress::{status, status_info, status_warn};

/// Prints Cargo-style status lines to stderr and forwards every event to `tracing`.
///
/// Per-package detail (roots, omissions, rules) is only printed when `verbose`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusObserver {
    pub verbose: bool,
}

impl StatusObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Observer for StatusObserver {
    fn artifact_included(&self, artifact: &ArtifactDescriptor) {
        TracingObserver.artifact_included(artifact);
        if self.verbose {
            status_info("Including", &artifact.coordinates.to_string());
        }
    }

    fn scanning(&self, archive: &Path) {
        TracingObserver.scanning(archive);
        let name = archive
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| archive.display().to_string());
        status("Scanning", &name);
    }

    fn packages_found(&self, archive: &Path, packages: usize) {
        TracingObserver.packages_found(archive, packages);
    }

    fn root_found(&self, root: &PackageName) {
        TracingObserver.root_found(root);
        if self.verbose {
            status_info("Root", root.as_str());
        }
    }

    fn default_package_skipped(&self) {
        TracingObserver.default_package_skipped();
        status_warn("Skipping", "the default package cannot be relocated");
    }

    fn package_omitted(&self, package: &PackageName, container: &PackageName) {
        TracingObserver.package_omitted(package, container);
        if self.verbose {
            status_info("Omitting", &format!("{package} (contained by {container})"));
        }
    }

    fn rule_generated(&self, rule: &RelocationRule) {
        TracingObserver.rule_generated(rule);
        status("Relocating", &format!("{} -> {}", rule.pattern, rule.shaded_pattern));
    }
}
