use std::path::PathBuf;

use immich_client::ImmichError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Client(#[from] ImmichError),
}

pub type Result<T> = std::result::Result<T, SyncError>;
