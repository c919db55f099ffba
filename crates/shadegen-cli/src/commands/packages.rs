//! Handler for `shadegen packages`.

use std::path::Path;

use miette::Result;
use shadegen_ops::ops_packages;
use shadegen_ops::reporter::StatusObserver;

pub fn exec(manifest: Option<&Path>, roots: bool, verbose: bool) -> Result<()> {
    let manifest_path = super::manifest_path(manifest)?;
    let observer = StatusObserver::new(verbose);
    let listed = ops_packages::packages(&manifest_path, roots, &observer)?;

    for entry in &listed {
        println!("{}", entry.artifact.coordinates);
        if entry.packages.is_empty() {
            println!("  (no packages)");
        }
        for package in &entry.packages {
            if package.is_default() {
                println!("  <default>");
            } else {
                println!("  {package}");
            }
        }
    }
    Ok(())
}
