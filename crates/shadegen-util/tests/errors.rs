use shadegen_util::errors::ShadeError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = ShadeError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = ShadeError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_configuration_error_display() {
    let err = ShadeError::Configuration {
        message: "Relocation prefix contains invalid package names: [1abc]".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Configuration error: Relocation prefix contains invalid package names: [1abc]"
    );
}

#[test]
fn test_archive_read_error_names_path() {
    let err = ShadeError::ArchiveRead {
        path: "/tmp/missing.jar".to_string(),
        message: "No such file or directory".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to read archive /tmp/missing.jar: No such file or directory"
    );
}

#[test]
fn test_precondition_error_display() {
    let err = ShadeError::Precondition {
        message: "default package".to_string(),
    };
    assert_eq!(err.to_string(), "Precondition violated: default package");
}

#[test]
fn test_generic_error_display() {
    let err = ShadeError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: ShadeError = io_err.into();
    assert!(matches!(err, ShadeError::Io(_)));
}

#[test]
fn test_error_converts_into_report() {
    let err = ShadeError::Render {
        message: "writer failed".to_string(),
    };
    let report: miette::Report = err.into();
    assert_eq!(report.to_string(), "Render error: writer failed");
}
