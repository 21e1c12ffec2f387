//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations.
///
/// Only loading page content can fail. The gallery subsystem never returns
/// errors: malformed galleries degrade into no-ops instead.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Content document could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content document is not valid JSON for the content model
    #[error("Content parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content document parsed but breaks a page-level rule
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::InvalidContent("duplicate section id: about".to_string());
        assert_eq!(format!("{}", err), "Invalid content: duplicate section id: about");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FolioError = io_err.into();
        assert!(matches!(err, FolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Json(_)));
    }
}
