//! Error handling for synqgen.
//! Defines the error type and result alias shared by both generators.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating class or test scaffolding.
///
/// Every variant is fatal to the invocation. Nothing is rolled back, so a
/// failure in the middle of a write sequence can leave earlier files behind.
#[derive(Error, Debug)]
pub enum Error {
    /// File system operation failed without a known path
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Writing or creating a specific path failed
    #[error("Failed to write '{}': {source}.", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template could not be loaded or rendered
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Render context could not be serialized
    #[error("Context error: {0}.")]
    ContextError(#[from] serde_json::Error),

    /// Class or base class name is not usable
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Output root could not be resolved or is missing
    #[error("Output layout error: {0}.")]
    LayoutError(String),
}

/// Convenience type alias for results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Prints the error to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
