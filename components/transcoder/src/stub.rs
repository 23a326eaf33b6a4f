//! In-process transcoder for tests: records every request and writes a
//! small placeholder file instead of running an encoder.

use crate::{Transcoder, TranscodeError};
use async_trait::async_trait;
use library_primitives::{BitrateMode, CompressionQuality};
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

pub const STUB_OUTPUT: &[u8] = b"stub transcode";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeRequest {
    pub source: PathBuf,
    pub target: PathBuf,
    pub quality: CompressionQuality,
    pub mode: BitrateMode,
}

#[derive(Debug, Default)]
pub struct TranscoderStub {
    requests: Mutex<Vec<TranscodeRequest>>,
    failing: bool,
}

impl TranscoderStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stub whose every encode fails
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<TranscodeRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Transcoder for TranscoderStub {
    async fn check_available(&self) -> Result<(), TranscodeError> {
        Ok(())
    }

    async fn transcode(
        &self,
        source: &Path,
        target: &Path,
        quality: CompressionQuality,
        mode: BitrateMode,
    ) -> Result<(), TranscodeError> {
        self.requests.lock().push(TranscodeRequest {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            quality,
            mode,
        });

        if self.failing {
            return Err(TranscodeError::Spawn {
                source_path: source.to_path_buf(),
                source: std::io::Error::other("stub encoder failure"),
            });
        }

        tokio::fs::write(target, STUB_OUTPUT)
            .await
            .map_err(|e| TranscodeError::Spawn {
                source_path: source.to_path_buf(),
                source: e,
            })
    }
}
