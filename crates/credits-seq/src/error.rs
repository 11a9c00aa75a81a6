//! Error types for credits sequence operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when decoding or encoding credits sequence files.
#[derive(Debug, Error)]
pub enum CreditsError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Record length byte is too small to hold an opcode.
    #[error("invalid record length {length} at offset {offset}")]
    InvalidLength { length: u8, offset: usize },

    /// Record extends past the end of the buffer.
    #[error("record at offset {offset} extends past end of buffer")]
    TruncatedRecord { offset: usize },

    /// Buffer ended without a terminator record.
    #[error("buffer exhausted without terminator record")]
    MissingTerminator,

    /// Unrecognized opcode.
    #[error("unknown opcode {opcode} at offset {offset}")]
    UnknownOpcode { opcode: u8, offset: usize },

    /// Record payload is too small for the command's fields.
    #[error("payload for opcode {opcode} too short: expected {expected} bytes, got {actual}")]
    PayloadTooShort {
        opcode: u8,
        expected: usize,
        actual: usize,
    },

    /// File slot index outside the fixed slot list.
    #[error("invalid file slot index {value} (must be 0..=5)")]
    InvalidSlot { value: u8 },

    /// Text field exceeds the single-byte length prefix.
    #[error("text field is {len} bytes, limit is {limit}")]
    TextTooLong { len: usize, limit: usize },

    /// Text contains a character outside the latin-1 range.
    #[error("character {ch:?} is not representable in latin-1")]
    TextNotLatin1 { ch: char },

    /// Encoded record exceeds the single-byte record length.
    #[error("record for opcode {opcode} is {length} bytes, limit is 255")]
    RecordTooLong { opcode: u8, length: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for credits sequence operations.
pub type Result<T> = std::result::Result<T, CreditsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CreditsError::UnknownOpcode {
            opcode: 35,
            offset: 4,
        };
        assert_eq!(format!("{err}"), "unknown opcode 35 at offset 4");

        let err = CreditsError::InvalidSlot { value: 9 };
        assert_eq!(format!("{err}"), "invalid file slot index 9 (must be 0..=5)");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: CreditsError = io_err.into();
        assert!(matches!(err, CreditsError::Io(_)));
    }
}
