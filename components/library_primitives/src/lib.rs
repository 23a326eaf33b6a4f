//! Shared value types for the condensed library components.
//!
//! Everything that more than one component needs to agree on lives here:
//! which file extensions count as media, how compression quality is
//! expressed, and how a path is moved from one library root to another.

mod format;
mod quality;
mod roots;

pub use format::{MediaFormat, PLAYLIST_EXTENSION, TRANSCODE_FORMAT};
pub use quality::{BitrateMode, CompressionQuality, QualityError};
pub use roots::{reroot, swap_extension};
