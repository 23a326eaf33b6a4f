use library_primitives::{BitrateMode, CompressionQuality, TRANSCODE_FORMAT};
use std::path::PathBuf;

/// Transcoding parameters for sources above the quality threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Compression {
    pub quality: CompressionQuality,
    pub mode: BitrateMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondenseSettings {
    pub library_root: PathBuf,
    pub condensed_root: PathBuf,
    /// `None` copies every track verbatim
    pub compression: Option<Compression>,
    /// Number of tracks materialized concurrently, at least 1
    pub jobs: usize,
}

impl CondenseSettings {
    pub fn new(library_root: impl Into<PathBuf>, condensed_root: impl Into<PathBuf>) -> Self {
        Self {
            library_root: library_root.into(),
            condensed_root: condensed_root.into(),
            compression: None,
            jobs: 1,
        }
    }

    pub fn with_compression(mut self, quality: CompressionQuality, mode: BitrateMode) -> Self {
        self.compression = Some(Compression { quality, mode });
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Extension condensed tracks and playlist entries end up with,
    /// when it differs from the source
    pub fn target_extension(&self) -> Option<&'static str> {
        self.compression.map(|_| TRANSCODE_FORMAT.extension())
    }
}
