use std::path::{Component, Path, PathBuf};

/// Move `path` from under `from` to the same place under `to`.
///
/// Returns `None` when `path` does not live under `from`, or when the
/// remainder would climb out of the root via `..`.
///
/// # Examples
/// ```
/// # use library_primitives::reroot;
/// # use std::path::Path;
/// let moved = reroot(
///     Path::new("Library/Artist/Song.flac"),
///     Path::new("Library"),
///     Path::new("Condensed"),
/// );
/// assert_eq!(moved.as_deref(), Some(Path::new("Condensed/Artist/Song.flac")));
/// ```
pub fn reroot(path: &Path, from: &Path, to: &Path) -> Option<PathBuf> {
    let rest = path.strip_prefix(from).ok()?;
    if rest
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
    {
        return None;
    }
    if rest.as_os_str().is_empty() {
        return Some(to.to_path_buf());
    }
    Some(to.join(rest))
}

/// Replace the extension of the final path component
pub fn swap_extension(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension.trim_start_matches('.'))
}
