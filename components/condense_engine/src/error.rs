use library_scanner::ScanError;
use media_metadata::MetadataError;
use playlist::PlaylistError;
use std::path::PathBuf;
use thiserror::Error;
use transcoder::TranscodeError;

/// Errors that end a condense run
#[derive(Error, Debug)]
pub enum CondenseError {
    #[error("failed to create condensed library at {path}")]
    CondensedRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("library {library} lies inside condensed library {condensed}")]
    OverlappingRoots { library: PathBuf, condensed: PathBuf },

    #[error("transcoder unavailable")]
    Transcoder(#[from] TranscodeError),

    #[error("failed to load playlists")]
    Scan(#[from] ScanError),

    #[error("failed to write condensed playlist")]
    Playlist(#[from] PlaylistError),
}

/// Why a single track could not be put into the condensed library.
///
/// Never ends a run; each one is counted as "not found" and logged.
#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("{0} does not exist!")]
    SourceMissing(PathBuf),

    #[error("{0} is not inside the library")]
    OutsideLibrary(PathBuf),

    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read quality: {0}")]
    Probe(#[from] MetadataError),

    #[error("quality reader did not finish: {0}")]
    ProbeTask(#[from] tokio::task::JoinError),

    #[error("could not transcode: {0}")]
    Transcode(#[from] TranscodeError),

    #[error("could not copy to {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
