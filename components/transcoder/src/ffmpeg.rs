use crate::{Transcoder, TranscodeError};
use async_trait::async_trait;
use library_primitives::{BitrateMode, CompressionQuality};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Transcoder backed by the `ffmpeg` command line tool
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    binary: PathBuf,
}

impl Ffmpeg {
    pub fn new() -> Self {
        Self::with_binary("ffmpeg")
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new()
    }
}

/// Command line arguments for one encode.
///
/// Only audio and, when present, embedded cover art are mapped; the cover
/// is copied unchanged.
/// Variable bitrate uses the encoder's inverse quality scale, constant
/// bitrate spends 32 kbps per quality level.
pub fn encoder_args(
    source: &Path,
    target: &Path,
    quality: CompressionQuality,
    mode: BitrateMode,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = ["-nostdin", "-y", "-loglevel", "error", "-i"]
        .into_iter()
        .map(OsString::from)
        .collect();
    args.push(source.into());
    args.extend(["-map", "0:a", "-map", "0:v?", "-c:v", "copy"].map(OsString::from));

    match mode {
        BitrateMode::Variable => {
            args.push("-q:a".into());
            args.push(quality.variable_bitrate_scale().to_string().into());
        }
        BitrateMode::Constant => {
            args.push("-b:a".into());
            args.push(format!("{}k", quality.constant_bitrate_kbps()).into());
        }
    }

    args.push(target.into());
    args
}

#[async_trait]
impl Transcoder for Ffmpeg {
    async fn check_available(&self) -> Result<(), TranscodeError> {
        which::which(&self.binary)
            .map(|_| ())
            .map_err(|_| TranscodeError::EncoderNotFound(self.binary.display().to_string()))
    }

    async fn transcode(
        &self,
        source: &Path,
        target: &Path,
        quality: CompressionQuality,
        mode: BitrateMode,
    ) -> Result<(), TranscodeError> {
        let args = encoder_args(source, target, quality, mode);
        tracing::debug!("Running {} {:?}", self.binary.display(), args);

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| TranscodeError::Spawn {
                source_path: source.to_path_buf(),
                source: e,
            })?;

        if !output.status.success() {
            if let Err(e) = tokio::fs::remove_file(target).await {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Could not remove partial output {}: {}", target.display(), e);
                }
            }
            return Err(TranscodeError::EncoderFailed {
                source_path: source.to_path_buf(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}
