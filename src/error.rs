//! Error types for the sffms2rtf library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sffms2rtf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during manuscript conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A file referenced by `\include` or `\input` does not exist.
    #[error("Included file not found: {0}")]
    MissingInclude(PathBuf),

    /// A file includes itself, directly or through other files.
    #[error("Inclusion cycle detected at: {0}")]
    IncludeCycle(PathBuf),

    /// Inclusions are nested deeper than the configured limit.
    #[error("More than {0} levels of inclusions, stopping")]
    InclusionDepthExceeded(usize),

    /// The input path was not supplied or does not exist.
    #[error("Incorrect input: {0}")]
    InvalidInput(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InclusionDepthExceeded(10);
        assert_eq!(err.to_string(), "More than 10 levels of inclusions, stopping");

        let err = Error::MissingInclude(PathBuf::from("ch02.tex"));
        assert_eq!(err.to_string(), "Included file not found: ch02.tex");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
