//! Line-based playlist files (`.m3u`) and the tracks they reference.
//!
//! A playlist is read relative to a prefix directory. Only lines ending in
//! a supported media extension are kept, so comments and `#EXTINF` lines
//! are dropped on read and are not written back.

mod error;
mod track;

pub use error::PlaylistError;
pub use track::TrackReference;

use library_primitives::{reroot, MediaFormat};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    path: PathBuf,
    prefix: PathBuf,
    entries: Vec<TrackReference>,
}

impl Playlist {
    /// Create a playlist from raw entry lines
    pub fn new<S: AsRef<str>>(
        path: impl Into<PathBuf>,
        prefix: impl Into<PathBuf>,
        lines: impl IntoIterator<Item = S>,
    ) -> Self {
        let prefix = prefix.into();
        let entries = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim_end().replace('\\', "/");
                MediaFormat::from_line_suffix(&line).map(|_| TrackReference::new(&prefix, &line))
            })
            .collect();

        Self {
            path: path.into(),
            prefix,
            entries,
        }
    }

    /// Read a playlist file, resolving its entries against `prefix`
    pub fn parse(path: impl AsRef<Path>, prefix: impl Into<PathBuf>) -> Result<Self, PlaylistError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| PlaylistError::read(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        let content = content.trim_start_matches('\u{feff}');

        let playlist = Self::new(path, prefix, content.lines());
        tracing::debug!(
            "Parsed playlist {} with {} entries",
            path.display(),
            playlist.len()
        );
        Ok(playlist)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Human readable name, the file stem
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn prefix(&self) -> &Path {
        &self.prefix
    }

    pub fn entries(&self) -> &[TrackReference] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Absolute paths of all entries, in playlist order
    pub fn absolute_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.entries.iter().map(TrackReference::absolute)
    }

    /// Drop repeated entries, keeping the first occurrence of each.
    ///
    /// Returns the removed entries. Running it again removes nothing.
    pub fn deduplicate(&mut self) -> Vec<TrackReference> {
        let mut seen = HashSet::new();
        let mut removed = Vec::new();

        self.entries.retain(|entry| {
            if seen.insert(entry.relative().to_string()) {
                true
            } else {
                removed.push(entry.clone());
                false
            }
        });

        for entry in &removed {
            tracing::info!(
                "Removed duplicate title {} from playlist {}",
                entry.relative(),
                self.path.display()
            );
        }

        removed
    }

    /// File content: one relative path per line
    pub fn to_m3u(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}\n", entry.relative()))
            .collect()
    }

    /// Write the playlist to `path`, or to its own path when `None`
    pub fn save(&self, path: Option<&Path>) -> Result<(), PlaylistError> {
        let target = path.unwrap_or(&self.path);
        fs::write(target, self.to_m3u()).map_err(|e| PlaylistError::write(target, e))?;
        tracing::debug!("Saved playlist {}", target.display());
        Ok(())
    }

    /// Move the playlist and its entries from `old_root` to `new_root`,
    /// optionally swapping every entry's extension.
    ///
    /// Applying this twice swaps roots that no longer match, so callers
    /// should prefer [`Playlist::rerooted`] on an untouched original.
    pub fn rewrite(&mut self, old_root: &Path, new_root: &Path, new_extension: Option<&str>) {
        self.entries = self
            .entries
            .iter()
            .map(|entry| entry.rerooted(old_root, new_root, new_extension))
            .collect();

        if let Some(path) = reroot(&self.path, old_root, new_root) {
            self.path = path;
        }
        if let Some(prefix) = reroot(&self.prefix, old_root, new_root) {
            self.prefix = prefix;
        }
    }

    /// Rewritten copy of this playlist, see [`Playlist::rewrite`]
    pub fn rerooted(&self, old_root: &Path, new_root: &Path, new_extension: Option<&str>) -> Self {
        let mut copy = self.clone();
        copy.rewrite(old_root, new_root, new_extension);
        copy
    }
}
