use hexgrid::{HexError, HexKey};
use hexpaint_ipc::IpcError;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unknown palette value: {0}")]
pub struct UnknownValue(pub String);

/// A chrome command the canvas refused. The session is left unchanged.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    UnknownValue(#[from] UnknownValue),
    #[error("Brush radius {radius} exceeds the maximum of {max}")]
    RadiusTooLarge { radius: u32, max: u32 },
}

/// Failure to load or store a map. A failed load never touches the current map.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Malformed map data: {0}")]
    Format(#[from] IpcError),
    #[error("Record {index}: {source}")]
    InvalidCoordinate {
        index: usize,
        #[source]
        source: HexError,
    },
    #[error("Record {index}: duplicate coordinate {key}")]
    DuplicateCoordinate { index: usize, key: HexKey },
    #[error("Record {index}: unknown palette value {value:?}")]
    UnknownValue { index: usize, value: String },
    #[error("No stored map named {0:?}")]
    NotFound(String),
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
