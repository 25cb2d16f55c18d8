use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Number of characters in the checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// How the checksum digit (0..=3) is derived from the data part of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChecksumRule {
    /// Number of characters, modulo 4.
    #[default]
    Length,
    /// Sum of the character codes, modulo 4.
    CharCodeSum,
}

impl ChecksumRule {
    /// Checksum digit for `data`, mapped through the 2-bit table.
    pub fn digit(&self, data: &str) -> Symbol {
        let value = match self {
            Self::Length => data.chars().count() % 4,
            // Only the low two bits matter, so wrapping is fine.
            Self::CharCodeSum => {
                let sum = data
                    .chars()
                    .fold(0u32, |acc, c| acc.wrapping_add(c as u32));
                (sum % 4) as usize
            }
        };
        Symbol::from_bits(value as u8)
    }

    /// The full 4-character suffix for `data`.
    pub fn suffix(&self, data: &str) -> String {
        let c = self.digit(data).to_char();
        std::iter::repeat(c).take(CHECKSUM_LEN).collect()
    }

    /// Whether `suffix` is the suffix this rule expects for `data`.
    pub fn verify(&self, data: &str, suffix: &str) -> bool {
        self.suffix(data) == suffix
    }
}

impl fmt::Display for ChecksumRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::CharCodeSum => write!(f, "char-code-sum"),
        }
    }
}

impl FromStr for ChecksumRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(Self::Length),
            "char-code-sum" | "sum" => Ok(Self::CharCodeSum),
            _ => Err(format!(
                "Unknown checksum rule: {s}. Available: length, char-code-sum"
            )),
        }
    }
}
