use thiserror::Error;

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("Checksum mismatch: {0}")]
    ChecksumMismatch(String),
    #[error("Invalid redundancy level: {0} (must be between 1 and 10)")]
    InvalidLevel(u8),
    #[error("Invalid symbol sequence: {0}")]
    InvalidSequence(String),
}
