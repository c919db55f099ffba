//! Operation: compute the shade plugin configuration for a project.

use std::collections::BTreeSet;
use std::path::Path;

use shadegen_core::artifact::ArtifactDescriptor;
use shadegen_core::config::OutputFormat;
use shadegen_core::filter::ArtifactFilter;
use shadegen_core::package::PackageName;
use shadegen_core::relocation::{CollapseMode, RelocationPrefix};
use shadegen_core::shade::ShadeConfiguration;
use shadegen_packages::observer::Observer;
use shadegen_packages::roots::root_packages;
use shadegen_packages::rules::relocation_rules;
use shadegen_packages::scanner::scan_packages;
use shadegen_packages::simplify::simplify_packages;
use shadegen_util::errors::{ShadeError, ShadeResult};

use crate::project::Project;

/// Options for `shadegen generate`.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Overrides the relocation prefix from the manifest.
    pub prefix: Option<String>,
    /// Overrides the collapse mode from the manifest.
    pub collapse: Option<CollapseMode>,
    /// Overrides the output format from the global config.
    pub format: Option<OutputFormat>,
}

/// A computed configuration and the format it should be rendered in.
#[derive(Debug, Clone)]
pub struct Generated {
    pub configuration: ShadeConfiguration,
    pub format: OutputFormat,
}

/// Load the project at `manifest_path` and compute its shade configuration.
///
/// The prefix and artifact patterns are validated before any archive is opened.
pub fn generate(
    manifest_path: &Path,
    opts: &GenerateOptions,
    observer: &dyn Observer,
) -> ShadeResult<Generated> {
    let project = Project::load(manifest_path)?;
    let prefix = project.relocation_prefix(opts.prefix.as_deref())?;
    let filter = project.manifest.artifact_filter()?;
    let mode = project.collapse_mode(opts.collapse);
    let format = project.output_format(opts.format);
    let artifacts = project.artifacts();

    let configuration = compute(&artifacts, &filter, &prefix, mode, observer)?;
    Ok(Generated {
        configuration,
        format,
    })
}

/// Run the whole analysis over already located artifacts.
///
/// Artifacts are scanned one after the other; the first unreadable archive
/// aborts the computation.
pub fn compute(
    artifacts: &[ArtifactDescriptor],
    filter: &ArtifactFilter,
    prefix: &RelocationPrefix,
    mode: CollapseMode,
    observer: &dyn Observer,
) -> Result<ShadeConfiguration, ShadeError> {
    let included = filter.apply(artifacts);
    for artifact in &included {
        observer.artifact_included(artifact);
    }

    let roots = match mode {
        CollapseMode::Union => {
            let mut all = BTreeSet::new();
            for artifact in &included {
                all.extend(scan_packages(&artifact.file, observer)?);
            }
            root_packages(&all, observer)
        }
        CollapseMode::PerArtifact => {
            let mut roots = BTreeSet::new();
            for artifact in &included {
                let packages = scan_packages(&artifact.file, observer)?;
                roots.extend(root_packages(&packages, observer));
            }
            roots
        }
    };

    let relocatable: Vec<PackageName> = roots
        .into_iter()
        .filter(|root| {
            if root.is_default() {
                observer.default_package_skipped();
                false
            } else {
                true
            }
        })
        .collect();

    let simplified = simplify_packages(&relocatable, observer)?;
    let rules = relocation_rules(&simplified, prefix, observer);

    Ok(ShadeConfiguration::new(included, rules))
}
