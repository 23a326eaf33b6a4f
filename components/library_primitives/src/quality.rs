use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum QualityError {
    #[error("compression quality out of range: {0} (expected 1..=10)")]
    OutOfRange(i64),
}

/// Target quality level for condensed copies, from 1 (smallest) to 10 (best).
///
/// The same level doubles as the threshold a source's quality score must
/// exceed before it gets transcoded at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct CompressionQuality(u8);

impl CompressionQuality {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Bitrate step per quality level in constant bitrate mode (kbps)
    pub const KBPS_PER_LEVEL: u32 = 32;

    pub const BEST: Self = Self(Self::MAX);

    /// # Examples
    /// ```
    /// # use library_primitives::{CompressionQuality, QualityError};
    /// let quality = CompressionQuality::new(5)?;
    /// assert_eq!(quality.constant_bitrate_kbps(), 160);
    /// assert!(CompressionQuality::new(11).is_err());
    /// # Ok::<(), QualityError>(())
    /// ```
    pub fn new(level: i64) -> Result<Self, QualityError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&level) {
            Ok(Self(level as u8))
        } else {
            Err(QualityError::OutOfRange(level))
        }
    }

    pub const fn level(self) -> u8 {
        self.0
    }

    /// Encoder VBR scale, where 0 is best and 9 is smallest
    pub const fn variable_bitrate_scale(self) -> u8 {
        Self::MAX - self.0
    }

    pub const fn constant_bitrate_kbps(self) -> u32 {
        self.0 as u32 * Self::KBPS_PER_LEVEL
    }

    /// Value a source quality score is compared against
    pub fn threshold(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for CompressionQuality {
    fn default() -> Self {
        Self::BEST
    }
}

impl TryFrom<i64> for CompressionQuality {
    type Error = QualityError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<CompressionQuality> for i64 {
    fn from(quality: CompressionQuality) -> Self {
        i64::from(quality.0)
    }
}

impl fmt::Display for CompressionQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the encoder spends bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitrateMode {
    Constant,
    Variable,
}

impl BitrateMode {
    pub fn from_variable(variable: bool) -> Self {
        if variable {
            BitrateMode::Variable
        } else {
            BitrateMode::Constant
        }
    }
}
