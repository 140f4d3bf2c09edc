//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// Fragment request completed with a non-2xx status
    #[error("Fragment {path} returned HTTP {status}")]
    FragmentStatus { path: String, status: u16 },

    /// Fragment request never produced a response (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Project identifier cannot be turned into a fragment path
    #[error("Invalid project id: {0:?}")]
    InvalidProjectId(String),

    /// Two cards in the catalog share an id
    #[error("Duplicate project id in catalog: {0}")]
    DuplicateProject(String),

    /// Catalog JSON could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl FolioError {
    /// Whether this error came from the fragment fetch path.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            FolioError::FragmentStatus { .. } | FolioError::Network(_)
        )
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::FragmentStatus {
            path: "projects-content/atlas.html".to_string(),
            status: 404,
        };
        assert_eq!(
            format!("{}", err),
            "Fragment projects-content/atlas.html returned HTTP 404"
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(matches!(err, FolioError::Catalog(_)));
        assert!(!err.is_fetch_failure());
    }

    #[test]
    fn test_fetch_failures() {
        assert!(FolioError::Network("offline".into()).is_fetch_failure());
        assert!(!FolioError::InvalidProjectId("../x".into()).is_fetch_failure());
    }
}
