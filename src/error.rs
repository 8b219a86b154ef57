//! Error types for folio.

use std::io;
use thiserror::Error;

/// Result type alias for folio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while producing a resume document.
///
/// The carousel controller never fails; everything here comes from the
/// pagination engine or the boundary that feeds it.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field of the resume record is missing or blank.
    #[error("Invalid resume input: {0}")]
    InvalidInput(String),

    /// Page geometry leaves no room to print a line.
    #[error("Degenerate page layout: {0}")]
    DegenerateLayout(String),

    /// Resume or options JSON could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while handing the document to a sink.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A host-provided sink or store rejected the call.
    #[error("Host callback failed: {0}")]
    Host(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("personal.name is required".into());
        assert_eq!(
            err.to_string(),
            "Invalid resume input: personal.name is required"
        );

        let err = Error::DegenerateLayout("no printable width".into());
        assert_eq!(err.to_string(), "Degenerate page layout: no printable width");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
