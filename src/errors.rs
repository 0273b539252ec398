// errors.rs
use thiserror::Error;

/// Errors raised by the listing store and the analysis layer.
///
/// `NoResults` and `EmptyRepository` are signals rather than failures; use
/// [`ListingError::is_empty_signal`] to fold them into an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid price {0}: price cannot be negative")]
    InvalidPrice(i64),

    #[error("listing not found: {0}")]
    NotFound(String),

    #[error("no listings matched the query")]
    NoResults,

    #[error("no listings available, add a listing first")]
    EmptyRepository,

    #[error("listing handle is absent")]
    NullEntity,

    #[error("aggregation failed: {0}")]
    AggregationFailure(String),
}

impl ListingError {
    /// True for the "valid query, nothing to show" conditions.
    pub fn is_empty_signal(&self) -> bool {
        matches!(self, ListingError::NoResults | ListingError::EmptyRepository)
    }
}

// Type alias used across the core.
pub type ListingResult<T> = Result<T, ListingError>;

/// Errors from writing a snapshot to an external sink.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from loading the session configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid seed listing '{address}': {source}")]
    SeedListing {
        address: String,
        #[source]
        source: ListingError,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to install log subscriber: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_signals_are_distinguished_from_failures() {
        assert!(ListingError::NoResults.is_empty_signal());
        assert!(ListingError::EmptyRepository.is_empty_signal());
        assert!(!ListingError::NotFound("1 Elm".into()).is_empty_signal());
        assert!(!ListingError::InvalidPrice(-1).is_empty_signal());
    }

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            ListingError::NotFound("123 Main St".into()).to_string(),
            "listing not found: 123 Main St"
        );
        assert_eq!(
            ListingError::InvalidPrice(-5).to_string(),
            "invalid price -5: price cannot be negative"
        );
    }
}
