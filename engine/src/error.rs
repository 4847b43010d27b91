use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Amount out of range: {0} (must be between 0 and 999.999.999,99)")]
    OutOfRange(f64),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Contract not found: {0}")]
    ContractNotFound(String),

    #[error("Import format error: {0}")]
    ImportFormatError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Contract storage error: {0}")]
    StorageError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV export error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl From<EngineError> for tonic::Status {
    fn from(err: EngineError) -> Self {
        tracing::error!("Mapping EngineError to tonic::Status: {:?}", err);
        let message = err.to_string();
        match err {
            EngineError::InvalidTimeFormat(_)
            | EngineError::OutOfRange(_)
            | EngineError::ValidationError(_)
            | EngineError::ImportFormatError(_) => tonic::Status::invalid_argument(message),
            EngineError::JsonError { source } => tonic::Status::invalid_argument(format!("JSON error: {}", source)),
            EngineError::ContractNotFound(id) => tonic::Status::not_found(format!("Contract not found: {}", id)),
            EngineError::ConfigError(msg) => tonic::Status::failed_precondition(format!("Configuration error: {}", msg)),
            EngineError::StorageError(msg) => tonic::Status::internal(format!("Contract storage error: {}", msg)),
            EngineError::IoError { source } => tonic::Status::internal(format!("I/O error: {}", source)),
            EngineError::CsvError { source } => tonic::Status::internal(format!("CSV export error: {}", source)),
            EngineError::AnyhowError(source) => tonic::Status::internal(format!("An internal error occurred: {}", source)),
        }
    }
}
