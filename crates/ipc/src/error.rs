//! Error types for IPC operations.

/// Errors that can occur while decoding or encoding wire data.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    #[error("Failed to (de)serialize message: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Record {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("Record {index}: field `{field}` is not a finite integer ({value})")]
    NonIntegral {
        index: usize,
        field: &'static str,
        value: f64,
    },
}
