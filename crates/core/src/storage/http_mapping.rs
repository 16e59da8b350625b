//! Pure functions for mapping repository errors to HTTP error bodies.
//!
//! Following the Functional Core pattern - pure functions with no side
//! effects, so the mapping is testable without a running server.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to the user-visible message of a 500 body.
///
/// Store failures surface the underlying message as-is; errors without a
/// usable message fall back to a generic one. Nothing here ever exposes a
/// stack trace or partial body.
///
/// # Examples
///
/// ```
/// use moviecrew_core::storage::{repository_error_to_public_message, RepositoryError};
///
/// let error = RepositoryError::QueryFailed("timeout".to_string());
/// assert_eq!(repository_error_to_public_message(&error), "timeout");
/// ```
pub fn repository_error_to_public_message(error: &RepositoryError) -> String {
    let message = match error {
        RepositoryError::ConnectionFailed(msg) | RepositoryError::QueryFailed(msg) => msg.clone(),
        other => other.to_string(),
    };

    if message.is_empty() {
        "Internal Server Error".to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_failed_surfaces_inner_message() {
        let error = RepositoryError::QueryFailed("timeout".to_string());
        assert_eq!(repository_error_to_public_message(&error), "timeout");
    }

    #[test]
    fn test_connection_failed_surfaces_inner_message() {
        let error = RepositoryError::ConnectionFailed("connection refused".to_string());
        assert_eq!(
            repository_error_to_public_message(&error),
            "connection refused"
        );
    }

    #[test]
    fn test_serialization_uses_full_display() {
        let error = RepositoryError::Serialization("missing field: names".to_string());
        assert_eq!(
            repository_error_to_public_message(&error),
            "Serialization error: missing field: names"
        );
    }

    #[test]
    fn test_empty_message_falls_back_to_generic() {
        let error = RepositoryError::QueryFailed(String::new());
        assert_eq!(
            repository_error_to_public_message(&error),
            "Internal Server Error"
        );
    }
}
