use serde::Deserialize;
use std::path::PathBuf;

/// Configuration file as written by the user, before validation.
///
/// Unknown sections (such as a `download` section) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawSettings {
    pub library: RawLibrary,
    #[serde(default)]
    pub condense: RawCondense,
    #[serde(default)]
    pub export: RawExport,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawLibrary {
    pub location: PathBuf,
    pub condensed_location: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct RawCondense {
    pub compress: bool,
    pub compression_quality: i64,
    pub variable_bitrate: bool,
    pub jobs: i64,
}

impl Default for RawCondense {
    fn default() -> Self {
        Self {
            compress: false,
            compression_quality: 10,
            variable_bitrate: true,
            jobs: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct RawExport {
    pub location: PathBuf,
}

impl Default for RawExport {
    fn default() -> Self {
        Self {
            location: PathBuf::from("."),
        }
    }
}
