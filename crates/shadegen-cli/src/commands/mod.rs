//! Command dispatch and handler modules.

mod generate;
mod packages;

use std::path::{Path, PathBuf};

use miette::Result;
use shadegen_ops::project::locate_manifest;
use shadegen_util::errors::ShadeError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            manifest,
            prefix,
            format,
            collapse,
            output,
        } => generate::exec(
            manifest.as_deref(),
            prefix,
            format,
            collapse,
            output.as_deref(),
            cli.verbose,
        ),
        Command::Packages { manifest, roots } => {
            packages::exec(manifest.as_deref(), roots, cli.verbose)
        }
    }
}

fn manifest_path(explicit: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(ShadeError::Io)?;
    Ok(locate_manifest(explicit, &cwd)?)
}
