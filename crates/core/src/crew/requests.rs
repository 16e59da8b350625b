use super::error::ValidationError;
use super::parse::parse_movie_id;

/// A crew lookup request as received from the HTTP surface, before
/// validation. `movie_id` is the raw path segment, numeric-as-string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewLookupRequest {
    pub role: String,
    pub movie_id: String,
    /// Optional case-insensitive substring filter over individual names.
    pub name: Option<String>,
}

impl CrewLookupRequest {
    /// Creates a request with no name filter.
    pub fn new(role: impl Into<String>, movie_id: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            movie_id: movie_id.into(),
            name: None,
        }
    }

    /// Sets the optional name filter.
    pub fn with_name_filter(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Validates the request and parses the movie id.
    ///
    /// An empty `name` filter is normalized away here so the rest of the
    /// pipeline treats it exactly like an absent one.
    pub fn validate(&self) -> Result<ValidatedLookup, ValidationError> {
        if self.role.is_empty() || self.movie_id.is_empty() {
            return Err(ValidationError::MissingParameters);
        }

        let movie_id =
            parse_movie_id(&self.movie_id).ok_or(ValidationError::NonNumericMovieId)?;

        let name = self
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(ValidatedLookup {
            movie_id,
            role: self.role.clone(),
            name,
        })
    }
}

/// A validated lookup: movie id parsed, empty name filter dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedLookup {
    pub movie_id: i64,
    pub role: String,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = CrewLookupRequest::new("director", "550");
        let lookup = request.validate().unwrap();
        assert_eq!(lookup.movie_id, 550);
        assert_eq!(lookup.role, "director");
        assert_eq!(lookup.name, None);
    }

    #[test]
    fn test_missing_role_is_rejected() {
        let request = CrewLookupRequest::new("", "550");
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingParameters)
        );
    }

    #[test]
    fn test_missing_movie_id_is_rejected() {
        let request = CrewLookupRequest::new("director", "");
        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingParameters)
        );
    }

    #[test]
    fn test_non_numeric_movie_id_is_rejected() {
        let request = CrewLookupRequest::new("director", "fight-club");
        assert_eq!(
            request.validate(),
            Err(ValidationError::NonNumericMovieId)
        );
    }

    #[test]
    fn test_numeric_prefix_is_accepted() {
        let request = CrewLookupRequest::new("director", "550abc");
        assert_eq!(request.validate().unwrap().movie_id, 550);
    }

    #[test]
    fn test_empty_name_filter_is_treated_as_absent() {
        let request =
            CrewLookupRequest::new("actor", "550").with_name_filter(Some(String::new()));
        assert_eq!(request.validate().unwrap().name, None);
    }

    #[test]
    fn test_name_filter_is_kept_verbatim() {
        let request =
            CrewLookupRequest::new("actor", "550").with_name_filter(Some("Brad".to_string()));
        assert_eq!(request.validate().unwrap().name.as_deref(), Some("Brad"));
    }
}
