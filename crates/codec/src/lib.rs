//! Byte to nucleotide-symbol transforms.
//!
//! Bytes are split into 2-bit groups and written with the alphabet
//! `A T G C`, optionally with some symbols doubled ("redundancy"), followed by
//! a 4-character checksum suffix. The transform is a toy: there is no error
//! correction, and the redundancy step is not reliably reversible (see
//! [`redundancy`]).

mod checksum;
mod codec;
mod composition;
mod error;
mod level;
pub mod redundancy;
pub mod sniff;
mod strategies;
mod symbol;
mod traits;

pub use checksum::{ChecksumRule, CHECKSUM_LEN};
pub use codec::{split_checksum, Codec, Decoded, SymbolSequence};
pub use composition::Composition;
pub use error::CodecError;
pub use level::RedundancyLevel;
pub use sniff::FileKind;
pub use strategies::{ParallelMapper, SequentialMapper, CHUNK_SIZE, PARALLEL_THRESHOLD};
pub use symbol::Symbol;
pub use traits::SymbolMapper;

use serde::{Deserialize, Serialize};

/// Strategies for mapping bytes to symbols and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MappingStrategy {
    /// One pass on the calling thread.
    Sequential,
    /// Chunked across the rayon pool for large inputs.
    #[default]
    Parallel,
}

impl MappingStrategy {
    pub fn to_symbols(&self, bytes: &[u8]) -> Vec<Symbol> {
        match self {
            MappingStrategy::Sequential => SequentialMapper.to_symbols(bytes),
            MappingStrategy::Parallel => ParallelMapper.to_symbols(bytes),
        }
    }

    pub fn to_bytes(&self, symbols: &[Symbol]) -> Vec<u8> {
        match self {
            MappingStrategy::Sequential => SequentialMapper.to_bytes(symbols),
            MappingStrategy::Parallel => ParallelMapper.to_bytes(symbols),
        }
    }
}

impl std::fmt::Display for MappingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sequential => write!(f, "sequential"),
            Self::Parallel => write!(f, "parallel"),
        }
    }
}

impl std::str::FromStr for MappingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(format!(
                "Unknown mapping strategy: {s}. Available: sequential, parallel"
            )),
        }
    }
}

impl SymbolMapper for MappingStrategy {
    fn to_symbols(&self, bytes: &[u8]) -> Vec<Symbol> {
        MappingStrategy::to_symbols(self, bytes)
    }

    fn to_bytes(&self, symbols: &[Symbol]) -> Vec<u8> {
        MappingStrategy::to_bytes(self, symbols)
    }
}

/// Encode with the default codec (parallel mapping, length checksum).
pub fn encode(bytes: &[u8], level: RedundancyLevel) -> SymbolSequence {
    Codec::default().encode(bytes, level)
}

/// Decode with the default codec.
pub fn decode(sequence: &str) -> Result<Vec<u8>, CodecError> {
    Codec::default().decode(sequence)
}
