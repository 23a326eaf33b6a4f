use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Extension (without dot) of playlist files in a library root
pub const PLAYLIST_EXTENSION: &str = "m3u";

/// Format produced by the transcoder
pub const TRANSCODE_FORMAT: MediaFormat = MediaFormat::Mp3;

/// Media container formats the library understands
///
/// Matching is case-sensitive: `song.MP3` is not a supported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    Flac,
    Mp3,
}

impl MediaFormat {
    pub const ALL: [MediaFormat; 2] = [MediaFormat::Flac, MediaFormat::Mp3];

    /// File extension without the leading dot
    pub const fn extension(self) -> &'static str {
        match self {
            MediaFormat::Flac => "flac",
            MediaFormat::Mp3 => "mp3",
        }
    }

    pub const fn is_lossless(self) -> bool {
        matches!(self, MediaFormat::Flac)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Check whether a raw playlist line names a file of a supported format
    ///
    /// # Examples
    /// ```
    /// # use library_primitives::MediaFormat;
    /// assert_eq!(MediaFormat::from_line_suffix("Artist/Song.flac"), Some(MediaFormat::Flac));
    /// assert_eq!(MediaFormat::from_line_suffix("#EXTM3U"), None);
    /// ```
    pub fn from_line_suffix(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| {
            line.strip_suffix(f.extension())
                .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
