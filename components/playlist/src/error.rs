use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("failed to read playlist {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write playlist {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlaylistError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlaylistError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlaylistError::Write {
            path: path.into(),
            source,
        }
    }
}
