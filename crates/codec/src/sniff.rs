//! Best-effort file type guess from the first recovered bits.
//!
//! Only used when no stored record matches a decoded sequence. The two
//! patterns are fixed and are not meant to be extended.

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Number of binary digits the sniffer looks at.
pub const HEADER_BITS: usize = 32;

const JPEG_PREFIX: &str = "11111111110110001001111111101000";
const TEXT_PATTERN: &str = "1010000100100000";

/// File kinds the sniffer can tell apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Jpeg,
    Text,
    Unknown,
}

impl FileKind {
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Text => "text/plain",
            Self::Unknown => "application/octet-stream",
        }
    }

    /// File name offered for a decoded file of this kind.
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::Jpeg => "decoded_image.jpg",
            Self::Text => "decoded_text.txt",
            Self::Unknown => "decoded_file",
        }
    }
}

/// Binary digits (`'0'`/`'1'`) of the first [`HEADER_BITS`] bits carried by
/// `symbols`. Shorter when fewer symbols are available.
pub fn header_bits(symbols: &[Symbol]) -> String {
    let mut header = String::with_capacity(HEADER_BITS);
    for sym in symbols.iter().take(HEADER_BITS / 2) {
        let bits = sym.bits();
        header.push(if bits & 0b10 != 0 { '1' } else { '0' });
        header.push(if bits & 0b01 != 0 { '1' } else { '0' });
    }
    header
}

/// Guess the file kind from a header produced by [`header_bits`].
pub fn sniff(header: &str) -> FileKind {
    if header.starts_with(JPEG_PREFIX) {
        FileKind::Jpeg
    } else if header.contains(TEXT_PATTERN) {
        FileKind::Text
    } else {
        FileKind::Unknown
    }
}
