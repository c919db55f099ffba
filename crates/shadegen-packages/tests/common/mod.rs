use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;

/// Write a jar under `dir`. Entries ending in `/` become directory entries,
/// everything else a small file.
pub fn write_jar(dir: &Path, file_name: &str, entries: &[&str]) -> PathBuf {
    let path = dir.join(file_name);
    let file = std::fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    for entry in entries {
        if entry.ends_with('/') {
            zip.add_directory(*entry, SimpleFileOptions::default()).unwrap();
        } else {
            zip.start_file(*entry, SimpleFileOptions::default()).unwrap();
            zip.write_all(&[0xCA, 0xFE, 0xBA, 0xBE]).unwrap();
        }
    }
    zip.finish().unwrap();
    path
}
