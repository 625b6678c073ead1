use thiserror::Error;

/// Failures that abort an audit run.
///
/// Missing data is not an error: it is collected into the report.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Error parsing {field} date [{value}]: {source}")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Couldn't list objects under prefix {prefix}: {message}")]
    Storage { prefix: String, message: String },
}

/// Helper for mapping a storage client error into a fatal audit error
pub fn storage_error<E: ToString>(prefix: &str, err: E) -> AuditError {
    AuditError::Storage {
        prefix: prefix.to_string(),
        message: err.to_string(),
    }
}
