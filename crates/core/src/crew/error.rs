use thiserror::Error;

use crate::storage::RepositoryError;

/// User-correctable input errors, rendered as HTTP 400.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Role or movie id path parameter absent or empty.
    #[error("Role and Movie ID are required.")]
    MissingParameters,
    /// Movie id had no leading base-10 digits. Rejected up front rather
    /// than forwarding a key value the store could never match.
    #[error("Movie ID must be a number.")]
    NonNumericMovieId,
}

/// Errors surfaced by the crew lookup pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameters_display() {
        assert_eq!(
            ValidationError::MissingParameters.to_string(),
            "Role and Movie ID are required."
        );
    }

    #[test]
    fn test_non_numeric_movie_id_display() {
        assert_eq!(
            ValidationError::NonNumericMovieId.to_string(),
            "Movie ID must be a number."
        );
    }

    #[test]
    fn test_lookup_error_is_transparent() {
        let error = LookupError::Store(RepositoryError::QueryFailed("timeout".to_string()));
        assert_eq!(error.to_string(), "Query failed: timeout");
    }
}
