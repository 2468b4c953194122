use std::io;
use std::path::PathBuf;

use synqgen::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ValidationError("bad name".to_string());
    assert_eq!(err.to_string(), "Validation error: bad name.");

    let err = Error::LayoutError("no root".to_string());
    assert_eq!(err.to_string(), "Output layout error: no root.");

    let err = Error::WriteError {
        path: PathBuf::from("/repo/foo.h"),
        source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    };
    assert_eq!(err.to_string(), "Failed to write '/repo/foo.h': denied.");
}
