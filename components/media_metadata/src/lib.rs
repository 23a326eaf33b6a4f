//! Uniform read-only view of a media file's tags and technical quality.
//!
//! [`open`] dispatches on the file extension to a format-specific reader
//! and returns a [`MediaDescriptor`]. Missing tags never fail a read; every
//! descriptive field falls back to empty.

mod error;
mod flac;
mod mp3;
mod tags;

pub use error::MetadataError;
pub use flac::{FlacFile, LOSSLESS_BITRATE_KBPS};
pub use library_primitives::MediaFormat;
pub use mp3::Mp3File;

use lofty::{AudioFile, Probe, TagType, TaggedFileExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Divisor turning a bitrate (kbps) into a quality score
pub const KBPS_PER_QUALITY_POINT: f64 = 32.0;

/// What every supported format can tell about itself
pub trait MediaInfo {
    fn path(&self) -> &Path;
    fn artist(&self) -> Vec<String>;
    fn album(&self) -> String;
    fn title(&self) -> String;
    fn track(&self) -> String;
    fn genre(&self) -> Vec<String>;

    /// Bitrate in kilobits per second
    fn bitrate(&self) -> f64;

    /// Dimensionless score compared against the compression threshold
    fn quality(&self) -> f64 {
        self.bitrate() / KBPS_PER_QUALITY_POINT
    }

    fn summary(&self) -> TrackSummary {
        TrackSummary {
            artist: self.artist(),
            album: self.album(),
            title: self.title(),
            track: self.track(),
            genre: self.genre(),
        }
    }
}

/// Descriptive tags of one track, as written to exports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub artist: Vec<String>,
    pub album: String,
    pub title: String,
    pub track: String,
    pub genre: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum MediaDescriptor {
    Mp3(Mp3File),
    Flac(FlacFile),
}

impl MediaDescriptor {
    pub fn format(&self) -> MediaFormat {
        match self {
            MediaDescriptor::Mp3(_) => MediaFormat::Mp3,
            MediaDescriptor::Flac(_) => MediaFormat::Flac,
        }
    }

    fn inner(&self) -> &dyn MediaInfo {
        match self {
            MediaDescriptor::Mp3(file) => file,
            MediaDescriptor::Flac(file) => file,
        }
    }
}

impl MediaInfo for MediaDescriptor {
    fn path(&self) -> &Path {
        self.inner().path()
    }

    fn artist(&self) -> Vec<String> {
        self.inner().artist()
    }

    fn album(&self) -> String {
        self.inner().album()
    }

    fn title(&self) -> String {
        self.inner().title()
    }

    fn track(&self) -> String {
        self.inner().track()
    }

    fn genre(&self) -> Vec<String> {
        self.inner().genre()
    }

    fn bitrate(&self) -> f64 {
        self.inner().bitrate()
    }
}

/// Open a media file and read its tags and stream properties
pub fn open(path: impl AsRef<Path>) -> Result<MediaDescriptor, MetadataError> {
    let path = path.as_ref();
    let format =
        MediaFormat::from_path(path).ok_or_else(|| MetadataError::UnsupportedFormat(path.into()))?;

    tracing::debug!("Reading {} metadata from {}", format, path.display());

    let tagged_file = Probe::open(path)
        .and_then(|probe| probe.read())
        .map_err(|e| MetadataError::read(path, e))?;

    let path = PathBuf::from(path);
    let descriptor = match format {
        MediaFormat::Mp3 => MediaDescriptor::Mp3(Mp3File {
            bitrate_kbps: tagged_file.properties().audio_bitrate().unwrap_or(0),
            tag: tagged_file.tag(TagType::Id3v2).cloned(),
            path,
        }),
        MediaFormat::Flac => MediaDescriptor::Flac(FlacFile {
            tag: tagged_file.tag(TagType::VorbisComments).cloned(),
            path,
        }),
    };

    Ok(descriptor)
}
