use thiserror::Error;

/// Error type that captures record store and persistence failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is full ({capacity} records)")]
    CapacityExceeded { capacity: usize },
    #[error("no record with id {0}")]
    NotFound(usize),
    #[error("invalid {field}: `{value}`")]
    InvalidValue { field: &'static str, value: String },
    #[error("data file is corrupt: {0}")]
    CorruptData(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl StoreError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
        }
    }
}
