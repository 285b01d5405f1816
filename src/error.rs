use std::fmt;

/// Malformed results table. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Two records share a year
    DuplicateYear { year: i32 },
    /// Winner or runner-up is blank
    EmptyName { year: i32 },
    /// Winner and runner-up resolve to the same country after normalization
    SameFinalists { year: i32, country: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateYear { year } => write!(f, "duplicate final for year {year}"),
            Self::EmptyName { year } => write!(f, "final {year} has an empty country name"),
            Self::SameFinalists { year, country } => {
                write!(f, "final {year} lists {country} as both winner and runner-up")
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Lookup miss against the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    UnknownCountry(String),
    UnknownYear(i32),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCountry(country) => write!(f, "{country} has never won the FIFA World Cup."),
            Self::UnknownYear(year) => write!(f, "No FIFA World Cup final was played in {year}."),
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_messages_are_neutral() {
        assert_eq!(
            QueryError::UnknownCountry("Atlantis".into()).to_string(),
            "Atlantis has never won the FIFA World Cup."
        );
        assert_eq!(
            QueryError::UnknownYear(1931).to_string(),
            "No FIFA World Cup final was played in 1931."
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::SameFinalists {
            year: 1954,
            country: "Germany".into(),
        };
        assert!(err.to_string().contains("both winner and runner-up"));
    }
}
