/// Error types for Agenda Digest
///
/// Uses thiserror for ergonomic error handling with proper Display implementations.
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Failed to initialize item store: {0}")]
    StoreInit(String),

    #[error("Failed to persist batch {batch}: {source}")]
    Persistence {
        batch: usize,
        #[source]
        source: Box<AppError>,
    },

    #[error("Records source error: {0}")]
    Source(String),

    #[error("LLM service error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

impl From<rusqlite_migration::Error> for AppError {
    fn from(error: rusqlite_migration::Error) -> Self {
        AppError::Migration(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_error_names_batch() {
        let err = AppError::Persistence {
            batch: 3,
            source: Box::new(AppError::Other("disk full".to_string())),
        };
        assert_eq!(err.to_string(), "Failed to persist batch 3: disk full");
    }
}
