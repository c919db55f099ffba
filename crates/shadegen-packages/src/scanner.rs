//! Discover the Java packages contained in a dependency archive.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use shadegen_core::package::PackageName;
use shadegen_util::errors::ShadeError;

use crate::observer::Observer;

/// Reserved metadata directory whose contents never count as packages.
pub const METADATA_DIR: &str = "META-INF";

/// Collect every package of `archive` that directly holds at least one file.
///
/// Entries are read in archive order. A file's directory only counts when
/// its explicit entry (`com/foo/`) has already been seen, so archives made of
/// bare file paths under-report packages. Entries under `META-INF/` are
/// ignored. Any read failure aborts the scan.
pub fn scan_packages(
    archive: &Path,
    observer: &dyn Observer,
) -> Result<BTreeSet<PackageName>, ShadeError> {
    observer.scanning(archive);

    let read_error = |message: String| ShadeError::ArchiveRead {
        path: archive.display().to_string(),
        message,
    };
    let file = File::open(archive).map_err(|e| read_error(e.to_string()))?;
    let zip = zip::ZipArchive::new(BufReader::new(file)).map_err(|e| read_error(e.to_string()))?;

    let mut directories: BTreeSet<&str> = BTreeSet::new();
    let mut packages: BTreeSet<PackageName> = BTreeSet::new();

    for name in zip.file_names() {
        if let Some(dir) = name.strip_suffix('/') {
            directories.insert(dir);
            continue;
        }
        if is_metadata(name) {
            tracing::debug!("skipping metadata entry {name}");
            continue;
        }
        let parent = parent_dir(name);
        if directories.contains(parent) {
            packages.insert(PackageName::from_dir_path(parent));
        }
    }

    observer.packages_found(archive, packages.len());
    Ok(packages)
}

fn is_metadata(entry: &str) -> bool {
    entry.split('/').next() == Some(METADATA_DIR)
}

/// `com/foo/Bar.class` -> `com/foo`; a root-level file has the empty parent.
fn parent_dir(entry: &str) -> &str {
    entry.rsplit_once('/').map_or("", |(dir, _)| dir)
}
