//! Configuration of the condenser: a JSON file, overridable from the
//! environment.
//!
//! ```json
//! {
//!   "library": { "location": "/music", "condensed_location": "/mnt/player" },
//!   "condense": { "compress": true, "compression_quality": 5, "variable_bitrate": true },
//!   "export": { "location": "exports" }
//! }
//! ```
//!
//! Every key can be overridden by an environment variable with the
//! `CONDENSE` prefix and `__` between levels, for example
//! `CONDENSE__CONDENSE__COMPRESS=false`.

mod error;
mod schema;

pub use error::ConfigError;

use config::{Config, Environment, File, FileFormat};
use library_primitives::{BitrateMode, CompressionQuality};
use schema::RawSettings;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const ENV_PREFIX: &str = "CONDENSE";

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub library: LibrarySettings,
    pub condense: CondenseOptions,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibrarySettings {
    pub location: PathBuf,
    pub condensed_location: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CondenseOptions {
    pub compress: bool,
    pub quality: CompressionQuality,
    pub mode: BitrateMode,
    pub jobs: usize,
}

impl CondenseOptions {
    /// Quality and bitrate mode, when compression is switched on
    pub fn compression(&self) -> Option<(CompressionQuality, BitrateMode)> {
        self.compress.then_some((self.quality, self.mode))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub location: PathBuf,
}

impl Settings {
    /// Load from `path`, then apply `CONDENSE__*` environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &Path, environment: Environment) -> Result<Self, ConfigError> {
        tracing::debug!("Loading configuration from {}", path.display());

        let raw: RawSettings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(true))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Self::validate(raw)
    }

    fn validate(raw: RawSettings) -> Result<Self, ConfigError> {
        if raw.library.location.as_os_str().is_empty() {
            return Err(ConfigError::invalid("library.location", "must not be empty"));
        }
        if raw.library.condensed_location.as_os_str().is_empty() {
            return Err(ConfigError::invalid(
                "library.condensed_location",
                "must not be empty",
            ));
        }

        let quality = CompressionQuality::new(raw.condense.compression_quality)
            .map_err(|e| ConfigError::invalid("condense.compression_quality", e.to_string()))?;

        let jobs = usize::try_from(raw.condense.jobs)
            .ok()
            .filter(|jobs| *jobs >= 1)
            .ok_or_else(|| {
                ConfigError::invalid(
                    "condense.jobs",
                    format!("must be at least 1, got {}", raw.condense.jobs),
                )
            })?;

        Ok(Self {
            library: LibrarySettings {
                location: raw.library.location,
                condensed_location: raw.library.condensed_location,
            },
            condense: CondenseOptions {
                compress: raw.condense.compress,
                quality,
                mode: BitrateMode::from_variable(raw.condense.variable_bitrate),
                jobs,
            },
            export: ExportSettings {
                location: raw.export.location,
            },
        })
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
