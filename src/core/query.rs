use thiserror::Error;

/// Rejection of a query before it reaches the search pipeline
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Search query must be at least {min} characters.")]
    QueryTooShort { min: usize, actual: usize },
}

/// A member search query that passed length validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
}

impl SearchQuery {
    pub const DEFAULT_MIN_LENGTH: usize = 2;

    /// Validate `raw` against a minimum length counted in characters
    pub fn parse(raw: &str, min_length: usize) -> Result<Self, ValidationError> {
        let actual = raw.chars().count();
        if actual < min_length {
            return Err(ValidationError::QueryTooShort {
                min: min_length,
                actual,
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            lowered: raw.to_lowercase(),
        })
    }

    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse(raw, Self::DEFAULT_MIN_LENGTH)
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub(crate) fn lowered(&self) -> &str {
        &self.lowered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_short() {
        assert_eq!(
            SearchQuery::new("k"),
            Err(ValidationError::QueryTooShort { min: 2, actual: 1 })
        );
        assert!(SearchQuery::new("").is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // two characters, four bytes
        assert!(SearchQuery::new("éé").is_ok());
        assert!(SearchQuery::parse("éé", 3).is_err());
    }

    #[test]
    fn test_raw_is_preserved() {
        let query = SearchQuery::new("KaNi").unwrap();
        assert_eq!(query.raw(), "KaNi");
        assert_eq!(query.lowered(), "kani");
    }
}
