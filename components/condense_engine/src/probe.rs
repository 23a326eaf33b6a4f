use media_metadata::{MediaInfo, MetadataError};
use std::path::Path;

/// Source of the quality score that decides between copy and transcode
pub trait QualityProbe {
    fn quality(&self, path: &Path) -> Result<f64, MetadataError>;
}

/// Reads the score from the file's own metadata
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataProbe;

impl QualityProbe for MetadataProbe {
    fn quality(&self, path: &Path) -> Result<f64, MetadataError> {
        Ok(media_metadata::open(path)?.quality())
    }
}

impl<F> QualityProbe for F
where
    F: Fn(&Path) -> Result<f64, MetadataError>,
{
    fn quality(&self, path: &Path) -> Result<f64, MetadataError> {
        self(path)
    }
}
