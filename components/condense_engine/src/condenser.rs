use crate::error::{CondenseError, MaterializeError};
use crate::probe::{MetadataProbe, QualityProbe};
use crate::report::CondenseReport;
use crate::settings::CondenseSettings;
use futures::stream::{self, StreamExt};
use library_primitives::{reroot, swap_extension, TRANSCODE_FORMAT};
use library_scanner::{list_contained_media_files, list_playlists};
use playlist::Playlist;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use transcoder::{Ffmpeg, Transcoder};

/// Every track referenced by at least one playlist, by absolute source
/// path, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredTracks(Vec<PathBuf>);

impl RequiredTracks {
    pub fn collect(playlists: &[Playlist]) -> Self {
        let mut seen = HashSet::new();
        let tracks = playlists
            .iter()
            .flat_map(Playlist::absolute_paths)
            .filter(|path| seen.insert(path.clone()))
            .collect();
        Self(tracks)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug)]
enum Materialized {
    AlreadyPresent(PathBuf),
    Copied(PathBuf),
    Transcoded(PathBuf),
}

pub struct Condenser {
    settings: CondenseSettings,
    transcoder: Arc<dyn Transcoder + Send + Sync>,
    probe: Arc<dyn QualityProbe + Send + Sync>,
}

impl Condenser {
    /// Condenser using ffmpeg and the files' own metadata
    pub fn new(settings: CondenseSettings) -> Self {
        Self::new_with(settings, Arc::new(Ffmpeg::new()), Arc::new(MetadataProbe))
    }

    pub fn new_with(
        settings: CondenseSettings,
        transcoder: Arc<dyn Transcoder + Send + Sync>,
        probe: Arc<dyn QualityProbe + Send + Sync>,
    ) -> Self {
        Self {
            settings,
            transcoder,
            probe,
        }
    }

    pub fn settings(&self) -> &CondenseSettings {
        &self.settings
    }

    /// Run one full reconciliation pass
    pub async fn run(&self) -> Result<CondenseReport, CondenseError> {
        self.check_roots()?;
        if self.settings.compression.is_some() {
            self.transcoder.check_available().await?;
        }

        let playlists = list_playlists(&self.settings.library_root)?;
        let required = RequiredTracks::collect(&playlists);
        tracing::info!(
            "{} playlists reference {} distinct titles",
            playlists.len(),
            required.len()
        );

        let mut report = self.materialize(&required).await?;
        report.removed = self.remove_orphans(&required).await;
        self.write_playlists(&playlists)?;

        report.log_summary();
        Ok(report)
    }

    /// Refuse to run when the library sits inside the condensed library,
    /// since reconciling would then delete library files.
    fn check_roots(&self) -> Result<(), CondenseError> {
        let library = canonical(&self.settings.library_root);
        let condensed = canonical(&self.settings.condensed_root);

        if library.starts_with(&condensed) {
            return Err(CondenseError::OverlappingRoots { library, condensed });
        }
        Ok(())
    }

    /// Where `source` lives in the condensed library, before any transcoding
    pub fn condensed_path(&self, source: &Path) -> Option<PathBuf> {
        reroot(
            source,
            &self.settings.library_root,
            &self.settings.condensed_root,
        )
    }

    /// Where `source` is expected to end up with the current settings
    pub fn expected_path(&self, source: &Path) -> Option<PathBuf> {
        let condensed = self.condensed_path(source)?;
        Some(match self.settings.target_extension() {
            Some(extension) => swap_extension(&condensed, extension),
            None => condensed,
        })
    }

    async fn materialize(&self, required: &RequiredTracks) -> Result<CondenseReport, CondenseError> {
        let root = &self.settings.condensed_root;
        tokio::fs::create_dir_all(root)
            .await
            .map_err(|e| CondenseError::CondensedRoot {
                path: root.clone(),
                source: e,
            })?;

        let total = required.len();
        let outcomes: Vec<Result<Materialized, MaterializeError>> = stream::iter(self.batches(required))
            .map(|batch| async move {
                let mut outcomes = Vec::with_capacity(batch.len());
                for (index, source) in batch {
                    let outcome = self.materialize_track(source).await;
                    log_outcome(index + 1, total, source, &outcome);
                    outcomes.push(outcome);
                }
                outcomes
            })
            .buffered(self.settings.jobs.max(1))
            .flat_map(stream::iter)
            .collect()
            .await;

        let mut report = CondenseReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(Materialized::AlreadyPresent(_)) => report.existing += 1,
                Ok(Materialized::Copied(_) | Materialized::Transcoded(_)) => report.added += 1,
                Err(_) => report.not_found += 1,
            }
        }
        Ok(report)
    }

    /// Split the required tracks into batches that never share a condensed
    /// file, each one materialized in order by a single worker.
    ///
    /// Tracks whose condensed paths only differ in extension land in the
    /// same batch, since one may satisfy the other. A single job gets one
    /// batch so everything runs in playlist order.
    fn batches<'a>(&self, required: &'a RequiredTracks) -> Vec<Vec<(usize, &'a Path)>> {
        let tracks = required.iter().enumerate();
        if self.settings.jobs <= 1 {
            return vec![tracks.collect()];
        }

        let mut batches: Vec<Vec<(usize, &Path)>> = Vec::new();
        let mut by_target: HashMap<PathBuf, usize> = HashMap::new();
        for (index, source) in tracks {
            let target = self
                .condensed_path(source)
                .map(|condensed| swap_extension(&condensed, TRANSCODE_FORMAT.extension()));
            let slot = target.map(|target| *by_target.entry(target).or_insert(batches.len()));
            match slot {
                Some(slot) if slot < batches.len() => batches[slot].push((index, source)),
                _ => batches.push(vec![(index, source)]),
            }
        }
        batches
    }

    async fn materialize_track(&self, source: &Path) -> Result<Materialized, MaterializeError> {
        let condensed = self
            .condensed_path(source)
            .ok_or_else(|| MaterializeError::OutsideLibrary(source.to_path_buf()))?;
        let converted = swap_extension(&condensed, TRANSCODE_FORMAT.extension());

        // Either suffix counts, whatever the current compression setting.
        if exists(&condensed).await || exists(&converted).await {
            return Ok(Materialized::AlreadyPresent(condensed));
        }

        if !exists(source).await {
            return Err(MaterializeError::SourceMissing(source.to_path_buf()));
        }

        if let Some(parent) = condensed.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| MaterializeError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        if let Some(compression) = self.settings.compression {
            let quality = self.probe_quality(source).await?;
            if quality > compression.quality.threshold() {
                self.transcoder
                    .transcode(source, &converted, compression.quality, compression.mode)
                    .await?;
                return Ok(Materialized::Transcoded(converted));
            }
        }

        if let Err(e) = tokio::fs::copy(source, &condensed).await {
            let _ = tokio::fs::remove_file(&condensed).await;
            return Err(MaterializeError::Copy {
                path: condensed,
                source: e,
            });
        }
        Ok(Materialized::Copied(condensed))
    }

    /// Metadata reads are blocking file I/O, so they run on the blocking pool
    async fn probe_quality(&self, source: &Path) -> Result<f64, MaterializeError> {
        let probe = Arc::clone(&self.probe);
        let source = source.to_path_buf();
        let quality = tokio::task::spawn_blocking(move || probe.quality(&source)).await??;
        Ok(quality)
    }

    /// Delete every condensed media file that no playlist asks for
    async fn remove_orphans(&self, required: &RequiredTracks) -> usize {
        let expected: HashSet<PathBuf> = required
            .iter()
            .filter_map(|source| self.expected_path(source))
            .collect();

        let mut removed = 0;
        for file in list_contained_media_files(&self.settings.condensed_root) {
            if expected.contains(&file) {
                continue;
            }
            match tokio::fs::remove_file(&file).await {
                Ok(()) => {
                    tracing::info!("{} removed.", file.display());
                    removed += 1;
                }
                Err(e) => tracing::warn!("Could not remove {}: {}", file.display(), e),
            }
        }
        removed
    }

    /// Save condensed copies of the playlists; the originals stay untouched
    fn write_playlists(&self, playlists: &[Playlist]) -> Result<(), CondenseError> {
        let library = &self.settings.library_root;
        let condensed = &self.settings.condensed_root;
        let extension = self.settings.target_extension();

        for playlist in playlists {
            let rewritten = playlist.rerooted(library, condensed, extension);
            if rewritten.path() == playlist.path() {
                tracing::warn!(
                    "Playlist {} is outside the library, not copying it",
                    playlist.path().display()
                );
                continue;
            }
            rewritten.save(None)?;
            tracing::debug!("Wrote {}", rewritten.path().display());
        }
        Ok(())
    }
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn log_outcome(
    count: usize,
    total: usize,
    source: &Path,
    outcome: &Result<Materialized, MaterializeError>,
) {
    match outcome {
        Ok(Materialized::AlreadyPresent(path)) => {
            tracing::info!("{}/{}: {} already exists!", count, total, path.display())
        }
        Ok(Materialized::Copied(path)) => {
            tracing::info!("{}/{}: {} added.", count, total, path.display())
        }
        Ok(Materialized::Transcoded(path)) => {
            tracing::info!("{}/{}: {} compressed and added.", count, total, path.display())
        }
        Err(e @ MaterializeError::SourceMissing(_)) => {
            tracing::warn!("{}/{}: {}", count, total, e)
        }
        Err(e) => {
            tracing::warn!("{}/{}: Error copying {}: {}", count, total, source.display(), e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Compression;
    use assert_matches::assert_matches;
    use library_primitives::{BitrateMode, CompressionQuality};
    use media_metadata::MetadataError;
    use std::fs;
    use tempfile::TempDir;
    use transcoder::stub::{TranscoderStub, STUB_OUTPUT};

    struct Fixture {
        _temp_dir: TempDir,
        library: PathBuf,
        condensed: PathBuf,
    }

    impl Fixture {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let library = temp_dir.path().join("Library");
            let condensed = temp_dir.path().join("Condensed");
            fs::create_dir_all(&library).unwrap();
            Self {
                _temp_dir: temp_dir,
                library,
                condensed,
            }
        }

        fn track(&self, relative: &str) {
            let path = self.library.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, format!("audio of {relative}")).unwrap();
        }

        fn condensed_file(&self, relative: &str, content: &str) {
            let path = self.condensed.join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }

        fn playlist(&self, name: &str, lines: &[&str]) {
            let content: String = lines.iter().map(|l| format!("{l}\n")).collect();
            fs::write(self.library.join(name), content).unwrap();
        }

        fn settings(&self) -> CondenseSettings {
            CondenseSettings::new(&self.library, &self.condensed)
        }

        fn compressed_settings(&self, level: i64) -> CondenseSettings {
            self.settings().with_compression(
                CompressionQuality::new(level).unwrap(),
                BitrateMode::Variable,
            )
        }

        fn read_condensed(&self, relative: &str) -> String {
            fs::read_to_string(self.condensed.join(relative)).unwrap()
        }
    }

    /// Quality 6 for files whose name starts with "hi", 4 otherwise
    fn hi_lo_probe(path: &Path) -> Result<f64, MetadataError> {
        let name = path.file_name().unwrap().to_string_lossy();
        Ok(if name.starts_with("hi") { 6.0 } else { 4.0 })
    }

    fn condenser(settings: CondenseSettings) -> Condenser {
        Condenser::new_with(
            settings,
            Arc::new(TranscoderStub::new()),
            Arc::new(hi_lo_probe),
        )
    }

    #[test]
    fn required_tracks_are_unique_in_playlist_order() {
        let first = Playlist::new("L/A.m3u", "L", ["b.mp3", "a.mp3"]);
        let second = Playlist::new("L/B.m3u", "L", ["a.mp3", "c.flac", "b.mp3"]);

        let required = RequiredTracks::collect(&[first, second]);

        let paths: Vec<&Path> = required.iter().collect();
        assert_eq!(
            paths,
            vec![
                Path::new("L/b.mp3"),
                Path::new("L/a.mp3"),
                Path::new("L/c.flac")
            ]
        );
    }

    #[test]
    fn expected_path_follows_compression_setting() {
        let plain = condenser(CondenseSettings::new("Library", "Condensed"));
        assert_eq!(
            plain.expected_path(Path::new("Library/Artist/Song.flac")),
            Some(PathBuf::from("Condensed/Artist/Song.flac"))
        );

        let compressed = condenser(
            CondenseSettings::new("Library", "Condensed")
                .with_compression(CompressionQuality::new(5).unwrap(), BitrateMode::Constant),
        );
        assert_eq!(
            compressed.expected_path(Path::new("Library/Artist/Song.flac")),
            Some(PathBuf::from("Condensed/Artist/Song.mp3"))
        );
        assert_eq!(compressed.expected_path(Path::new("Elsewhere/Song.flac")), None);
    }

    #[tokio::test]
    async fn copies_tracks_and_writes_condensed_playlists() {
        let fixture = Fixture::new();
        fixture.track("Artist/01 Song.mp3");
        fixture.track("Other/02 Tune.flac");
        fixture.playlist(
            "Mix.m3u",
            &[r"Artist\01 Song.mp3", "Other/02 Tune.flac", "Artist/01 Song.mp3"],
        );

        let report = condenser(fixture.settings()).run().await.unwrap();

        assert_eq!(
            report,
            CondenseReport {
                removed: 0,
                added: 2,
                existing: 0,
                not_found: 0
            }
        );
        assert_eq!(
            fixture.read_condensed("Artist/01 Song.mp3"),
            "audio of Artist/01 Song.mp3"
        );
        assert_eq!(
            fixture.read_condensed("Mix.m3u"),
            "Artist/01 Song.mp3\nOther/02 Tune.flac\n"
        );
        // the library playlist was de-duplicated in place
        assert_eq!(
            fs::read_to_string(fixture.library.join("Mix.m3u")).unwrap(),
            "Artist/01 Song.mp3\nOther/02 Tune.flac\n"
        );
    }

    #[tokio::test]
    async fn second_run_changes_nothing() {
        let fixture = Fixture::new();
        fixture.track("a.mp3");
        fixture.track("Sub/hi.flac");
        fixture.playlist("One.m3u", &["a.mp3", "Sub/hi.flac"]);
        fixture.playlist("Two.m3u", &["Sub/hi.flac"]);
        let condenser = condenser(fixture.compressed_settings(5));

        condenser.run().await.unwrap();
        let first_playlists = (
            fixture.read_condensed("One.m3u"),
            fixture.read_condensed("Two.m3u"),
        );

        let second = condenser.run().await.unwrap();

        assert_eq!(second.added, 0);
        assert_eq!(second.removed, 0);
        assert_eq!(second.existing, 2);
        assert_eq!(second.not_found, 0);
        assert_eq!(
            (
                fixture.read_condensed("One.m3u"),
                fixture.read_condensed("Two.m3u")
            ),
            first_playlists
        );
    }

    #[tokio::test]
    async fn removes_exactly_the_unreferenced_tracks() {
        let fixture = Fixture::new();
        fixture.track("x.mp3");
        fixture.playlist("Mix.m3u", &["x.mp3"]);
        fixture.condensed_file("x.mp3", "already condensed");
        fixture.condensed_file("y.mp3", "orphan");
        fixture.condensed_file("notes.txt", "not media");

        let report = condenser(fixture.settings()).run().await.unwrap();

        assert_eq!(report.removed, 1);
        assert_eq!(report.existing, 1);
        assert!(!fixture.condensed.join("y.mp3").exists());
        assert_eq!(fixture.read_condensed("x.mp3"), "already condensed");
        assert!(fixture.condensed.join("notes.txt").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn never_deletes_through_symlinks_out_of_the_condensed_root() {
        let fixture = Fixture::new();
        fixture.playlist("Empty.m3u", &[]);
        let precious = fixture.library.parent().unwrap().join("Precious");
        fs::create_dir_all(&precious).unwrap();
        fs::write(precious.join("keep.mp3"), "not ours").unwrap();
        fs::create_dir_all(&fixture.condensed).unwrap();
        std::os::unix::fs::symlink(&precious, fixture.condensed.join("linked")).unwrap();
        fixture.condensed_file("stale.mp3", "orphan");

        let report = condenser(fixture.settings()).run().await.unwrap();

        assert_eq!(report.removed, 1);
        assert!(precious.join("keep.mp3").exists());
        assert!(!fixture.condensed.join("stale.mp3").exists());
    }

    #[tokio::test]
    async fn transcodes_only_above_the_threshold() {
        let fixture = Fixture::new();
        fixture.track("hi.flac");
        fixture.track("lo.mp3");
        fixture.playlist("Mix.m3u", &["hi.flac", "lo.mp3"]);
        let stub = Arc::new(TranscoderStub::new());
        let condenser = Condenser::new_with(
            fixture.compressed_settings(5),
            stub.clone(),
            Arc::new(hi_lo_probe),
        );

        let report = condenser.run().await.unwrap();

        assert_eq!(report.added, 2);
        assert_eq!(report.removed, 0);
        let requests = stub.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].source, fixture.library.join("hi.flac"));
        assert_eq!(requests[0].target, fixture.condensed.join("hi.mp3"));
        assert_eq!(requests[0].quality.level(), 5);
        assert_eq!(
            fs::read(fixture.condensed.join("hi.mp3")).unwrap(),
            STUB_OUTPUT
        );
        assert_eq!(fixture.read_condensed("lo.mp3"), "audio of lo.mp3");
        assert!(!fixture.condensed.join("hi.flac").exists());
        assert_eq!(fixture.read_condensed("Mix.m3u"), "hi.mp3\nlo.mp3\n");
    }

    #[tokio::test]
    async fn missing_source_is_counted_not_fatal() {
        let fixture = Fixture::new();
        fixture.track("here.mp3");
        fixture.playlist("Mix.m3u", &["gone.mp3", "here.mp3"]);

        let report = condenser(fixture.settings()).run().await.unwrap();

        assert_eq!(
            report,
            CondenseReport {
                removed: 0,
                added: 1,
                existing: 0,
                not_found: 1
            }
        );
        assert_eq!(fixture.read_condensed("Mix.m3u"), "gone.mp3\nhere.mp3\n");
    }

    #[tokio::test]
    async fn transcode_failure_is_counted_not_fatal() {
        let fixture = Fixture::new();
        fixture.track("hi.flac");
        fixture.track("lo.mp3");
        fixture.playlist("Mix.m3u", &["hi.flac", "lo.mp3"]);
        let condenser = Condenser::new_with(
            fixture.compressed_settings(5),
            Arc::new(TranscoderStub::failing()),
            Arc::new(hi_lo_probe),
        );

        let report = condenser.run().await.unwrap();

        assert_eq!(report.added, 1);
        assert_eq!(report.not_found, 1);
        assert!(!fixture.condensed.join("hi.mp3").exists());
    }

    #[tokio::test]
    async fn unreadable_quality_is_counted_not_fatal() {
        let fixture = Fixture::new();
        fixture.track("song.flac");
        fixture.playlist("Mix.m3u", &["song.flac"]);
        let condenser = Condenser::new_with(
            fixture.compressed_settings(5),
            Arc::new(TranscoderStub::new()),
            Arc::new(|path: &Path| -> Result<f64, MetadataError> {
                Err(MetadataError::UnsupportedFormat(path.to_path_buf()))
            }),
        );

        let report = condenser.run().await.unwrap();

        assert_eq!(report.not_found, 1);
        assert_eq!(report.added, 0);
    }

    #[tokio::test]
    async fn toggling_compression_off_heals_on_the_following_run() {
        let fixture = Fixture::new();
        fixture.track("Song.flac");
        fixture.playlist("Mix.m3u", &["Song.flac"]);
        fixture.condensed_file("Song.mp3", "left over from a compressed run");

        let condenser = condenser(fixture.settings());

        let first = condenser.run().await.unwrap();
        assert_eq!(first.existing, 1);
        assert_eq!(first.removed, 1);
        assert!(!fixture.condensed.join("Song.flac").exists());

        let second = condenser.run().await.unwrap();
        assert_eq!(second.added, 1);
        assert_eq!(fixture.read_condensed("Song.flac"), "audio of Song.flac");
    }

    #[tokio::test]
    async fn concurrent_jobs_give_the_same_report() {
        let fixture = Fixture::new();
        let names: Vec<String> = (0..12).map(|i| format!("Dir{}/track{i}.mp3", i % 3)).collect();
        for name in &names {
            fixture.track(name);
        }
        let lines: Vec<&str> = names.iter().map(String::as_str).collect();
        fixture.playlist("Big.m3u", &lines);

        let report = condenser(fixture.settings().with_jobs(4)).run().await.unwrap();

        assert_eq!(report.added, 12);
        assert_eq!(report.not_found, 0);
        for name in &names {
            assert!(fixture.condensed.join(name).exists());
        }
    }

    #[tokio::test]
    async fn concurrent_jobs_materialize_a_shared_target_once() {
        let fixture = Fixture::new();
        fixture.track("Song.flac");
        fixture.track("Song.mp3");
        fixture.playlist("Mix.m3u", &["Song.flac", "Song.mp3"]);
        let stub = Arc::new(TranscoderStub::new());
        let condenser = Condenser::new_with(
            fixture.compressed_settings(5).with_jobs(2),
            stub.clone(),
            Arc::new(|_: &Path| -> Result<f64, MetadataError> { Ok(9.0) }),
        );

        let report = condenser.run().await.unwrap();

        assert_eq!(report.added, 1);
        assert_eq!(report.existing, 1);
        let targets: Vec<PathBuf> = stub.requests().into_iter().map(|r| r.target).collect();
        assert_eq!(targets, vec![fixture.condensed.join("Song.mp3")]);
    }

    #[tokio::test]
    async fn quality_is_read_off_the_async_worker() {
        let fixture = Fixture::new();
        fixture.track("hi.flac");
        fixture.playlist("Mix.m3u", &["hi.flac"]);
        let readers = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let recorded = Arc::clone(&readers);
        let condenser = Condenser::new_with(
            fixture.compressed_settings(5),
            Arc::new(TranscoderStub::new()),
            Arc::new(move |_: &Path| -> Result<f64, MetadataError> {
                recorded.lock().push(std::thread::current().id());
                Ok(6.0)
            }),
        );

        let report = condenser.run().await.unwrap();

        assert_eq!(report.added, 1);
        let readers = readers.lock();
        assert_eq!(readers.len(), 1);
        assert_ne!(readers[0], std::thread::current().id());
    }

    #[tokio::test]
    async fn library_inside_condensed_root_is_refused() {
        let fixture = Fixture::new();
        let settings = CondenseSettings::new(&fixture.library, fixture.library.parent().unwrap());

        let result = condenser(settings).run().await;

        assert_matches!(result, Err(CondenseError::OverlappingRoots { .. }));
    }

    #[tokio::test]
    async fn uncreatable_condensed_root_is_fatal() {
        let fixture = Fixture::new();
        fixture.track("a.mp3");
        fixture.playlist("Mix.m3u", &["a.mp3"]);
        let blocker = fixture.library.parent().unwrap().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();
        let settings = CondenseSettings::new(&fixture.library, blocker.join("Condensed"));

        let result = condenser(settings).run().await;

        assert_matches!(result, Err(CondenseError::CondensedRoot { .. }));
    }

    #[test]
    fn compression_settings_are_recorded() {
        let settings = CondenseSettings::new("L", "C")
            .with_compression(CompressionQuality::new(3).unwrap(), BitrateMode::Constant)
            .with_jobs(0);

        assert_eq!(
            settings.compression,
            Some(Compression {
                quality: CompressionQuality::new(3).unwrap(),
                mode: BitrateMode::Constant
            })
        );
        assert_eq!(settings.jobs, 1);
        assert_eq!(settings.target_extension(), Some("mp3"));
    }
}
