use playlist::PlaylistError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to list directory {path}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Playlist(#[from] PlaylistError),
}

impl ScanError {
    pub fn list_directory(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScanError::ListDirectory {
            path: path.into(),
            source,
        }
    }
}
