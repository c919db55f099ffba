//! Handler for `shadegen generate`.

use std::path::Path;

use miette::Result;
use shadegen_core::config::OutputFormat;
use shadegen_core::relocation::CollapseMode;
use shadegen_ops::ops_generate::{self, GenerateOptions};
use shadegen_ops::reporter::StatusObserver;
use shadegen_util::errors::ShadeError;
use shadegen_util::progress::status;

use crate::cli::{Collapse, Format};

pub fn exec(
    manifest: Option<&Path>,
    prefix: Option<String>,
    format: Option<Format>,
    collapse: Option<Collapse>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let manifest_path = super::manifest_path(manifest)?;
    tracing::debug!("using manifest {}", manifest_path.display());

    let opts = GenerateOptions {
        prefix,
        collapse: collapse.map(|c| match c {
            Collapse::Union => CollapseMode::Union,
            Collapse::PerArtifact => CollapseMode::PerArtifact,
        }),
        format: format.map(|f| match f {
            Format::Xml => OutputFormat::Xml,
            Format::Json => OutputFormat::Json,
        }),
    };
    let observer = StatusObserver::new(verbose);
    let generated = ops_generate::generate(&manifest_path, &opts, &observer)?;
    let rendered = shadegen_render::render(&generated.configuration, generated.format)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(ShadeError::Io)?;
            status("Wrote", &path.display().to_string());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
