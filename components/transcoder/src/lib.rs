//! Produces reduced-bitrate copies of audio files with an external encoder.

mod error;
mod ffmpeg;

#[cfg(any(test, feature = "stub"))]
pub mod stub;

pub use error::TranscodeError;
pub use ffmpeg::{encoder_args, Ffmpeg};
pub use library_primitives::{BitrateMode, CompressionQuality, TRANSCODE_FORMAT};

use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait Transcoder {
    /// Check that the encoder can be run at all
    async fn check_available(&self) -> Result<(), TranscodeError>;

    /// Encode `source` into `target`, re-encoding audio only.
    ///
    /// On failure no partial `target` is left behind.
    async fn transcode(
        &self,
        source: &Path,
        target: &Path,
        quality: CompressionQuality,
        mode: BitrateMode,
    ) -> Result<(), TranscodeError>;
}
