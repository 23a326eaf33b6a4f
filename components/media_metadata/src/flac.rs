use crate::tags::{first_text, texts};
use crate::MediaInfo;
use lofty::{ItemKey, Tag};
use std::fmt;
use std::path::{Path, PathBuf};

/// Bitrate reported for lossless files.
///
/// Far above anything a lossy encoder produces, so a lossless source always
/// clears the compression threshold.
pub const LOSSLESS_BITRATE_KBPS: f64 = 9999.0;

/// FLAC file, described by its Vorbis comments
#[derive(Clone)]
pub struct FlacFile {
    pub(crate) path: PathBuf,
    pub(crate) tag: Option<Tag>,
}

// lofty's Tag has no Debug impl
impl fmt::Debug for FlacFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlacFile")
            .field("path", &self.path)
            .field("tagged", &self.tag.is_some())
            .finish()
    }
}

impl MediaInfo for FlacFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn artist(&self) -> Vec<String> {
        texts(self.tag.as_ref(), &ItemKey::TrackArtist)
    }

    fn album(&self) -> String {
        first_text(self.tag.as_ref(), &ItemKey::AlbumTitle)
    }

    fn title(&self) -> String {
        first_text(self.tag.as_ref(), &ItemKey::TrackTitle)
    }

    fn track(&self) -> String {
        first_text(self.tag.as_ref(), &ItemKey::TrackNumber)
    }

    fn genre(&self) -> Vec<String> {
        texts(self.tag.as_ref(), &ItemKey::Genre)
    }

    fn bitrate(&self) -> f64 {
        LOSSLESS_BITRATE_KBPS
    }
}
