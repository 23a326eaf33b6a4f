//! Keeps a condensed copy of a music library in line with its playlists.
//!
//! A run has four phases, always in this order:
//!
//! 1. discover: load and de-duplicate the library's playlists
//! 2. materialize: copy or transcode every referenced track that is missing
//!    from the condensed library
//! 3. reconcile: delete condensed tracks no playlist references any more
//! 4. re-root: write the playlists into the condensed library, pointing at
//!    the condensed tracks
//!
//! Per-track failures are counted and logged, never fatal.

mod condenser;
mod error;
mod probe;
mod report;
mod settings;

pub use condenser::{Condenser, RequiredTracks};
pub use error::{CondenseError, MaterializeError};
pub use probe::{MetadataProbe, QualityProbe};
pub use report::CondenseReport;
pub use settings::{CondenseSettings, Compression};
