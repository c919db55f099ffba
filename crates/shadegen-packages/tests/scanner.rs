mod common;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::Path;

use common::write_jar;
use shadegen_core::package::PackageName;
use shadegen_packages::observer::{Observer, SilentObserver};
use shadegen_packages::scanner::scan_packages;
use shadegen_util::errors::ShadeError;
use tempfile::TempDir;

fn set(list: &[&str]) -> BTreeSet<PackageName> {
    list.iter().map(|s| PackageName::parse(s).unwrap()).collect()
}

#[test]
fn test_only_directories_with_files_are_packages() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(
        tmp.path(),
        "foo.jar",
        &["META-INF/", "META-INF/MANIFEST", "com/", "com/foo/", "com/foo/Foo.class"],
    );
    let packages = scan_packages(&jar, &SilentObserver).unwrap();
    assert_eq!(packages, set(&["com.foo"]));
}

#[test]
fn test_multiple_packages_and_resources() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(
        tmp.path(),
        "lib.jar",
        &[
            "io/",
            "io/vertx/",
            "io/vertx/core/",
            "io/vertx/core/Vertx.class",
            "io/vertx/core/impl/",
            "io/vertx/core/impl/VertxImpl.class",
            "io/vertx/core/impl/resources.properties",
            "io/vertx/web/",
            "io/vertx/web/Router.class",
        ],
    );
    let packages = scan_packages(&jar, &SilentObserver).unwrap();
    assert_eq!(
        packages,
        set(&["io.vertx.core", "io.vertx.core.impl", "io.vertx.web"])
    );
}

#[test]
fn test_missing_directory_entries_under_report() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(
        tmp.path(),
        "flat.jar",
        &["org/flat/Flat.class", "org/listed/", "org/listed/Listed.class"],
    );
    let packages = scan_packages(&jar, &SilentObserver).unwrap();
    assert_eq!(packages, set(&["org.listed"]));
}

#[test]
fn test_metadata_entries_ignored() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(
        tmp.path(),
        "meta.jar",
        &[
            "META-INF/",
            "META-INF/MANIFEST.MF",
            "META-INF/services/",
            "META-INF/services/javax.annotation.processing.Processor",
        ],
    );
    let packages = scan_packages(&jar, &SilentObserver).unwrap();
    assert!(packages.is_empty());
}

#[test]
fn test_root_files_excluded() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(tmp.path(), "root.jar", &["Main.class", "a/", "a/A.class"]);
    let packages = scan_packages(&jar, &SilentObserver).unwrap();
    assert_eq!(packages, set(&["a"]));
}

#[test]
fn test_registered_root_directory_yields_default_package() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(tmp.path(), "rootdir.jar", &["/", "Main.class"]);
    let packages = scan_packages(&jar, &SilentObserver).unwrap();
    assert_eq!(packages, BTreeSet::from([PackageName::default_package()]));
}

#[test]
fn test_directory_entry_after_its_files_is_not_counted() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(
        tmp.path(),
        "late.jar",
        &["com/foo/Foo.class", "com/", "com/foo/", "com/bar/", "com/bar/Bar.class"],
    );
    let packages = scan_packages(&jar, &SilentObserver).unwrap();
    assert_eq!(packages, set(&["com.bar"]));
}

#[test]
fn test_empty_archive() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(tmp.path(), "empty.jar", &[]);
    let packages = scan_packages(&jar, &SilentObserver).unwrap();
    assert!(packages.is_empty());
}

#[test]
fn test_missing_archive_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let err = scan_packages(&tmp.path().join("nope.jar"), &SilentObserver).unwrap_err();
    match err {
        ShadeError::ArchiveRead { path, .. } => assert!(path.ends_with("nope.jar")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_corrupt_archive_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.jar");
    std::fs::write(&path, b"this is not a zip file").unwrap();
    let err = scan_packages(&path, &SilentObserver).unwrap_err();
    assert!(matches!(err, ShadeError::ArchiveRead { .. }));
}

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<String>>,
}

impl Observer for Recorder {
    fn scanning(&self, archive: &Path) {
        self.events
            .borrow_mut()
            .push(format!("scan {}", archive.file_name().unwrap().to_string_lossy()));
    }

    fn packages_found(&self, _archive: &Path, packages: usize) {
        self.events.borrow_mut().push(format!("found {packages}"));
    }
}

#[test]
fn test_observer_notified() {
    let tmp = TempDir::new().unwrap();
    let jar = write_jar(tmp.path(), "obs.jar", &["x/", "x/X.class"]);
    let recorder = Recorder::default();
    scan_packages(&jar, &recorder).unwrap();
    assert_eq!(
        *recorder.events.borrow(),
        vec!["scan obs.jar".to_string(), "found 1".to_string()]
    );
}
