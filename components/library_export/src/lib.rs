//! Flat JSON dumps of a library's tags and its playlists.
//!
//! Two files are written into the export directory:
//! `library.json` with every media file below the library root, and
//! `playlists.json` with the tracks of every playlist in the root.

mod error;
mod titles;

pub use error::ExportError;
pub use titles::{PlaylistMap, TitleMap};

use library_scanner::{list_media_files, read_playlists};
use media_metadata::{MediaInfo, MetadataError, TrackSummary};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const LIBRARY_EXPORT_FILE: &str = "library.json";
pub const PLAYLISTS_EXPORT_FILE: &str = "playlists.json";

/// How many entries ended up in each export file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub titles: usize,
    pub playlists: usize,
}

/// Read tags through [`media_metadata::open`]
pub fn read_summary(path: &Path) -> Result<TrackSummary, MetadataError> {
    Ok(media_metadata::open(path)?.summary())
}

/// Tags of every media file below `root`. Unreadable files are skipped.
pub fn library_titles<R>(root: &Path, read: R) -> TitleMap
where
    R: Fn(&Path) -> Result<TrackSummary, MetadataError>,
{
    list_media_files(root)
        .iter()
        .filter_map(|path| summarize(path, &read))
        .collect()
}

/// Tags of every playlist's tracks, keyed by playlist name
pub fn playlist_titles<R>(root: &Path, read: R) -> Result<PlaylistMap, ExportError>
where
    R: Fn(&Path) -> Result<TrackSummary, MetadataError>,
{
    let mut playlists = PlaylistMap::default();
    for playlist in read_playlists(root)? {
        let titles = playlist
            .absolute_paths()
            .filter_map(|path| summarize(&path, &read))
            .collect();
        playlists.push(playlist.name(), titles);
    }
    Ok(playlists)
}

/// Write both export files for `library_root` into `export_dir`
pub fn export(library_root: &Path, export_dir: &Path) -> Result<ExportSummary, ExportError> {
    export_with(library_root, export_dir, read_summary)
}

pub fn export_with<R>(
    library_root: &Path,
    export_dir: &Path,
    read: R,
) -> Result<ExportSummary, ExportError>
where
    R: Fn(&Path) -> Result<TrackSummary, MetadataError>,
{
    let library = library_titles(library_root, &read);
    let playlists = playlist_titles(library_root, &read)?;

    fs::create_dir_all(export_dir).map_err(|e| ExportError::io(export_dir, e))?;
    write_json(&export_dir.join(LIBRARY_EXPORT_FILE), &library)?;
    write_json(&export_dir.join(PLAYLISTS_EXPORT_FILE), &playlists)?;

    tracing::info!(
        "Exported {} titles and {} playlists to {}",
        library.len(),
        playlists.len(),
        export_dir.display()
    );

    Ok(ExportSummary {
        titles: library.len(),
        playlists: playlists.len(),
    })
}

fn summarize<R>(path: &Path, read: &R) -> Option<TrackSummary>
where
    R: Fn(&Path) -> Result<TrackSummary, MetadataError>,
{
    match read(path) {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::warn!("Skipping {}: {}", path.display(), e);
            None
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).map_err(|e| ExportError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    /// Title is the file stem; files named `broken.*` cannot be read
    fn fake_tags(path: &Path) -> Result<TrackSummary, MetadataError> {
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        if stem == "broken" || !path.exists() {
            return Err(MetadataError::UnsupportedFormat(path.to_path_buf()));
        }
        Ok(TrackSummary {
            artist: vec!["Artist".to_string()],
            title: stem,
            ..TrackSummary::default()
        })
    }

    fn library() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("A")).unwrap();
        for name in ["A/one.flac", "A/two.mp3", "broken.mp3", "cover.jpg"] {
            fs::write(root.join(name), b"audio").unwrap();
        }
        fs::write(root.join("Mix.m3u"), "A/two.mp3\nmissing.mp3\nA/one.flac\n").unwrap();
        fs::write(root.join("Empty.m3u"), "").unwrap();
        temp_dir
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn library_titles_skip_unreadable_files() {
        let temp_dir = library();

        let titles = library_titles(temp_dir.path(), fake_tags);

        let names: Vec<&str> = titles.titles().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn playlist_titles_follow_playlist_order() {
        let temp_dir = library();

        let playlists = playlist_titles(temp_dir.path(), fake_tags).unwrap();

        assert_eq!(playlists.len(), 2);
        assert!(playlists.get("Empty").unwrap().is_empty());
        let names: Vec<&str> = playlists
            .get("Mix")
            .unwrap()
            .titles()
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(names, vec!["two", "one"]);
    }

    #[test]
    fn writes_both_files_pretty_printed() {
        let temp_dir = library();
        let export_dir = temp_dir.path().join("out");

        let summary = export_with(temp_dir.path(), &export_dir, fake_tags).unwrap();

        assert_eq!(
            summary,
            ExportSummary {
                titles: 2,
                playlists: 2
            }
        );
        let library_json = fs::read_to_string(export_dir.join(LIBRARY_EXPORT_FILE)).unwrap();
        assert!(library_json.starts_with("{\n  \"title_0\": {\n    \"artist\""));
        assert_eq!(
            read_json(&export_dir.join(PLAYLISTS_EXPORT_FILE))["Mix"]["title_0"],
            json!({"artist": ["Artist"], "album": "", "title": "two", "track": "", "genre": []})
        );
    }

    #[test]
    fn real_reader_skips_files_that_are_not_audio() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("bad.flac"), b"not a flac stream").unwrap();
        fs::write(root.join("Mix.m3u"), "bad.flac\n").unwrap();
        let export_dir = root.join("out");

        let summary = export(root, &export_dir).unwrap();

        assert_eq!(summary.titles, 0);
        assert_eq!(read_json(&export_dir.join(LIBRARY_EXPORT_FILE)), json!({}));
        assert_eq!(
            read_json(&export_dir.join(PLAYLISTS_EXPORT_FILE)),
            json!({"Mix": {}})
        );
    }

    #[test]
    fn missing_library_root_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = export_with(
            &temp_dir.path().join("absent"),
            &temp_dir.path().join("out"),
            fake_tags,
        );
        assert_matches!(result, Err(ExportError::Scan(_)));
    }
}
