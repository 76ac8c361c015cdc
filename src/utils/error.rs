use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Aggregated reference-data load failure. One entry per collection
    /// that could not be read or parsed; assembly never runs partially.
    #[error("Reference data load failed: {}", failures.join("; "))]
    LoadError { failures: Vec<String> },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PreviewError>;
