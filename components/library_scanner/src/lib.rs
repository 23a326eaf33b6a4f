//! Enumerates media files and playlists below a library root.

mod error;

pub use error::ScanError;

use library_primitives::{MediaFormat, PLAYLIST_EXTENSION};
use playlist::Playlist;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory nesting limit for [`list_media_files`].
///
/// Symlink loops are detected by walkdir itself; this caps pathological
/// but loop-free trees.
pub const MAX_SCAN_DEPTH: usize = 64;

/// Every supported media file below `root`, depth first.
///
/// Entries are visited in file name order, so an unchanged tree always
/// yields the same sequence. A missing root yields nothing.
pub fn list_media_files(root: &Path) -> Vec<PathBuf> {
    walk_media_files(root, true)
}

/// Like [`list_media_files`], but only files physically inside `root`.
///
/// Symlinks below the root are neither descended into nor listed, so
/// every returned path is safe to delete without touching anything
/// outside the tree.
pub fn list_contained_media_files(root: &Path) -> Vec<PathBuf> {
    walk_media_files(root, false)
}

fn walk_media_files(root: &Path, follow_links: bool) -> Vec<PathBuf> {
    if !root.exists() {
        tracing::debug!("{} does not exist, nothing to scan", root.display());
        return Vec::new();
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(follow_links)
        .max_depth(MAX_SCAN_DEPTH)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                match e.loop_ancestor() {
                    Some(ancestor) => tracing::warn!(
                        "Skipping symlink loop back to {}",
                        ancestor.display()
                    ),
                    None => tracing::warn!("Skipping unreadable entry: {}", e),
                }
                continue;
            }
        };

        if !follow_links && entry.path_is_symlink() && entry.depth() > 0 {
            tracing::debug!("Not following symlink {}", entry.path().display());
            continue;
        }

        if entry.file_type().is_file() && MediaFormat::from_path(entry.path()).is_some() {
            files.push(entry.into_path());
        }
    }

    tracing::debug!("Found {} media files below {}", files.len(), root.display());
    files
}

/// Parse every playlist directly inside `root`, without modifying them.
///
/// Entries are resolved relative to `root`. Subdirectories are not searched.
pub fn read_playlists(root: &Path) -> Result<Vec<Playlist>, ScanError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(root)
        .map_err(|e| ScanError::list_directory(root, e))?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                None
            }
        })
        .filter(|path| {
            path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(PLAYLIST_EXTENSION)
        })
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| Playlist::parse(path, root).map_err(ScanError::from))
        .collect()
}

/// Load the playlists of a library root, de-duplicated.
///
/// Each playlist is written back to its file right away, so the library's
/// own playlists are cleaned up before anything else reads them.
pub fn list_playlists(root: &Path) -> Result<Vec<Playlist>, ScanError> {
    let mut playlists = read_playlists(root)?;

    for playlist in &mut playlists {
        playlist.deduplicate();
        playlist.save(None)?;
    }

    tracing::info!("Loaded {} playlists from {}", playlists.len(), root.display());
    Ok(playlists)
}
