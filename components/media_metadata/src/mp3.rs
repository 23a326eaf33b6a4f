use crate::tags::{first_text, texts};
use crate::MediaInfo;
use lofty::{ItemKey, Tag};
use std::fmt;
use std::path::{Path, PathBuf};

/// MPEG layer III file, described by its stream bitrate and ID3v2 tag
#[derive(Clone)]
pub struct Mp3File {
    pub(crate) path: PathBuf,
    pub(crate) bitrate_kbps: u32,
    pub(crate) tag: Option<Tag>,
}

// lofty's Tag has no Debug impl
impl fmt::Debug for Mp3File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mp3File")
            .field("path", &self.path)
            .field("bitrate_kbps", &self.bitrate_kbps)
            .field("tagged", &self.tag.is_some())
            .finish()
    }
}

impl MediaInfo for Mp3File {
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
        f64::from(self.bitrate_kbps)
    }
}
