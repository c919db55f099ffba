use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all shadegen operations.
///
/// Every variant is fatal for the run: nothing is retried and no partial
/// configuration is produced.
#[derive(Debug, Error, Diagnostic)]
pub enum ShadeError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed manifest (e.g. Shade.toml).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Shade.toml for syntax errors"))]
    Manifest { message: String },

    /// Invalid user configuration, such as a malformed relocation prefix.
    #[error("Configuration error: {message}")]
    #[diagnostic(help(
        "The relocation prefix must be a dot-separated list of Java identifiers, e.g. `relocated.`"
    ))]
    Configuration { message: String },

    /// A dependency archive could not be opened or enumerated.
    #[error("Failed to read archive {path}: {message}")]
    #[diagnostic(help("Make sure the artifact exists and is a valid jar/zip file"))]
    ArchiveRead { path: String, message: String },

    /// An internal invariant was violated by a caller.
    #[error("Precondition violated: {message}")]
    Precondition { message: String },

    /// Serializing the generated configuration failed.
    #[error("Render error: {message}")]
    Render { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ShadeResult<T> = miette::Result<T>;
