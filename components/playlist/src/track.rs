use library_primitives::{reroot, MediaFormat};
use std::path::{Path, PathBuf};

/// One playlist entry: a relative path and the root it is relative to.
///
/// The relative part always uses forward slashes, whatever the playlist
/// file used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackReference {
    prefix: PathBuf,
    relative: String,
}

impl TrackReference {
    pub fn new(prefix: impl Into<PathBuf>, relative: &str) -> Self {
        Self {
            prefix: prefix.into(),
            relative: relative.replace('\\', "/"),
        }
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    /// Path as written to the playlist file
    pub fn relative(&self) -> &str {
        &self.relative
    }

    /// Identity of the track on disk
    pub fn absolute(&self) -> PathBuf {
        self.prefix.join(&self.relative)
    }

    pub fn format(&self) -> Option<MediaFormat> {
        MediaFormat::from_line_suffix(&self.relative)
    }

    /// Same track seen from `new_root` instead of `old_root`
    ///
    /// A prefix outside `old_root` is kept as is.
    pub fn rerooted(&self, old_root: &Path, new_root: &Path, new_extension: Option<&str>) -> Self {
        let prefix = reroot(&self.prefix, old_root, new_root).unwrap_or_else(|| {
            tracing::warn!(
                "Track {} is not under {}, keeping its prefix",
                self.relative,
                old_root.display()
            );
            self.prefix.clone()
        });

        let relative = match new_extension {
            Some(extension) => replace_extension(&self.relative, extension),
            None => self.relative.clone(),
        };

        Self { prefix, relative }
    }
}

fn replace_extension(relative: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    let name_start = relative.rfind('/').map_or(0, |i| i + 1);

    match relative[name_start..].rfind('.') {
        Some(dot) if dot > 0 => format!("{}.{}", &relative[..name_start + dot], extension),
        _ => format!("{relative}.{extension}"),
    }
}
