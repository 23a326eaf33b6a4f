use lofty::LoftyError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("unsupported media format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("failed to read media file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: LoftyError,
    },
}

impl MetadataError {
    pub fn read(path: impl Into<PathBuf>, source: LoftyError) -> Self {
        MetadataError::Read {
            path: path.into(),
            source,
        }
    }
}
