//! Error types for block persistence.

use std::fmt;
use std::io;

use rowblock_core::BlockError;

/// Errors that can occur while saving or loading a row block.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream ended partway through a block.
    Truncated {
        /// The array or scalar being read when the stream ended.
        field: &'static str,
    },
    /// A length prefix or array could not be decoded.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The decoded arrays do not form a valid block.
    Invalid(BlockError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { field } => write!(f, "stream truncated while reading {field}"),
            Self::Malformed { detail } => write!(f, "malformed block: {detail}"),
            Self::Invalid(e) => write!(f, "invalid block: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<BlockError> for CodecError {
    fn from(e: BlockError) -> Self {
        Self::Invalid(e)
    }
}
