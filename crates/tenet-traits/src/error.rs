//! Error types for the tenet framework.
//!
//! Missing metrics are not errors: lookups return `Option` and checks that
//! cannot be evaluated are skipped. The variants below cover malformed source
//! data, estimations that cannot be carried out and identifiers that cannot be
//! resolved.

use thiserror::Error;

/// The main error type for tenet operations.
#[derive(Debug, Error)]
pub enum TenetError {
    /// Error due to invalid or malformed data.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A metric that an operation cannot do without is not reported.
    #[error("Missing metric: {0}")]
    MissingMetric(String),

    /// Error when data is insufficient for the requested operation.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// A computation would have produced a non-finite result.
    #[error("Computation failed: {0}")]
    Computation(String),

    /// A company identifier (ticker or ISIN) could not be resolved.
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    /// Error when a philosophy is not found.
    #[error("Philosophy not found: {0}")]
    PhilosophyNotFound(String),

    /// Error from Polars operations.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// I/O error reading configuration or cached data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error (de)serializing snapshots or configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tenet operations.
pub type Result<T> = std::result::Result<T, TenetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TenetError::InsufficientData("need 3 periods, got 2".to_string());
        assert_eq!(err.to_string(), "Insufficient data: need 3 periods, got 2");

        let err = TenetError::UnknownIdentifier("FR0000000000".to_string());
        assert_eq!(err.to_string(), "Unknown identifier: FR0000000000");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<f64>("not a number");
        let err: TenetError = parse.unwrap_err().into();
        assert!(matches!(err, TenetError::Json(_)));
    }
}
