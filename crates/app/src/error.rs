use std::path::PathBuf;

use painting::{CommandError, PersistenceError};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("rejected command: {0}")]
    Command(#[from] CommandError),
    #[error("map storage: {0}")]
    Persistence(#[from] PersistenceError),
}
