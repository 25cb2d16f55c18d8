use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Redundancy level in `1..=10`.
///
/// Levels up to [`RedundancyLevel::PLAIN_MAX`] leave the symbol stream
/// untouched. Higher levels double every symbol whose index is a multiple of
/// [`RedundancyLevel::stride`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RedundancyLevel(u8);

impl RedundancyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    /// Highest level that adds no redundancy.
    pub const PLAIN_MAX: u8 = 3;

    pub fn new(level: u8) -> Result<Self, CodecError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(CodecError::InvalidLevel(level))
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Distance between duplicated positions, or `None` when the level adds
    /// no redundancy.
    ///
    /// Always at least 10 for valid levels.
    pub const fn stride(self) -> Option<usize> {
        if self.0 <= Self::PLAIN_MAX {
            None
        } else {
            Some(100 / self.0 as usize)
        }
    }

    /// Number of symbols the redundancy step inserts into a plain stream of
    /// `plain_len` symbols.
    pub fn inserted_for(self, plain_len: usize) -> usize {
        match self.stride() {
            Some(stride) => plain_len.div_ceil(stride),
            None => 0,
        }
    }
}

impl Default for RedundancyLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for RedundancyLevel {
    type Error = CodecError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<RedundancyLevel> for u8 {
    fn from(level: RedundancyLevel) -> Self {
        level.0
    }
}

impl fmt::Display for RedundancyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RedundancyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("Invalid redundancy level: {s}. Expected an integer 1-10"))?;
        Self::new(level).map_err(|e| e.to_string())
    }
}
