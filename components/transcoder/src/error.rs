use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("encoder not found: {0}")]
    EncoderNotFound(String),

    #[error("failed to run encoder for {source_path}")]
    Spawn {
        source_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("encoder exited with {status} for {source_path}: {stderr}")]
    EncoderFailed {
        source_path: PathBuf,
        status: ExitStatus,
        stderr: String,
    },
}
