//! Error types for rowblock push operations.
//!
//! Every variant describes caller-supplied data that violates a container
//! contract. Containers roll back to their pre-call state before returning
//! one of these, so the caller decides whether to skip the row, abort, or
//! repair the input. Internal-consistency failures (bugs) are not modelled
//! here; they panic.

use std::error::Error;
use std::fmt;

/// Which identifier array an out-of-range value was destined for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// Feature index.
    Index,
    /// Field id.
    Field,
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index => write!(f, "index"),
            Self::Field => write!(f, "field"),
        }
    }
}

/// Errors returned when pushing rows or blocks into a container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockError {
    /// An identifier does not fit the container's index type.
    IdOutOfRange {
        /// Which array the identifier was destined for.
        kind: IdKind,
        /// The offending identifier, widened to `u64`.
        value: u64,
        /// Largest identifier the container's index type can hold.
        max: u64,
    },
    /// A block's row count differs from the size declared by the caller.
    SizeMismatch {
        /// Size the caller declared.
        declared: usize,
        /// Row count of the block.
        actual: usize,
    },
    /// Label count per row differs from the container's label width.
    LabelWidthMismatch {
        /// Container label width.
        expected: usize,
        /// Width carried by the row or block.
        found: usize,
    },
    /// The number of auxiliary sub-rows differs from the configured extras.
    ExtraCountMismatch {
        /// Number of extras configured on the container.
        expected: usize,
        /// Number carried by the row or block.
        found: usize,
    },
    /// An extra block no longer has the same row count as its parent.
    ExtraMisaligned {
        /// Position of the extra.
        slot: usize,
        /// Row count of the parent container.
        parent_rows: usize,
        /// Row count of the extra.
        extra_rows: usize,
    },
    /// A per-entry or per-row array has the wrong length.
    LengthMismatch {
        /// Name of the offending array.
        array: &'static str,
        /// Expected element count.
        expected: usize,
        /// Actual element count.
        found: usize,
    },
    /// Incoming data carries an optional array (or not) unlike what is
    /// already stored.
    ///
    /// Values and field ids must be present for every entry or for none;
    /// weights and session ids for every row or for none.
    ValueLayoutMismatch {
        /// Name of the optional array (`"value"`, `"field"`, `"weight"` or `"qid"`).
        array: &'static str,
        /// Whether the container already stores this array.
        stored: bool,
    },
    /// An offset array is empty, decreasing, or points past the entry arrays.
    InvalidOffsets {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A container configuration was rejected.
    InvalidConfig {
        /// Human-readable description of what went wrong.
        reason: String,
    },
}

impl BlockError {
    /// Shorthand for an out-of-range feature index.
    pub fn index_out_of_range(value: u64, max: u64) -> Self {
        Self::IdOutOfRange {
            kind: IdKind::Index,
            value,
            max,
        }
    }

    /// Shorthand for an out-of-range field id.
    pub fn field_out_of_range(value: u64, max: u64) -> Self {
        Self::IdOutOfRange {
            kind: IdKind::Field,
            value,
            max,
        }
    }
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdOutOfRange { kind, value, max } => {
                write!(
                    f,
                    "{kind} {value} exceeds numeric bound of current type (max {max})"
                )
            }
            Self::SizeMismatch { declared, actual } => {
                write!(f, "block size is not equal to size: {actual} vs {declared}")
            }
            Self::LabelWidthMismatch { expected, found } => {
                write!(f, "label width mismatch: expected {expected}, found {found}")
            }
            Self::ExtraCountMismatch { expected, found } => {
                write!(
                    f,
                    "extra block count mismatch: container has {expected}, input has {found}"
                )
            }
            Self::ExtraMisaligned {
                slot,
                parent_rows,
                extra_rows,
            } => {
                write!(
                    f,
                    "extra block {slot} has {extra_rows} rows, parent has {parent_rows}"
                )
            }
            Self::LengthMismatch {
                array,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{array} array has {found} elements, expected {expected}"
                )
            }
            Self::ValueLayoutMismatch { array, stored } => {
                if *stored {
                    write!(f, "data without {array} pushed into a container that stores {array}")
                } else {
                    write!(f, "data with {array} pushed into a container that stores none")
                }
            }
            Self::InvalidOffsets { detail } => write!(f, "invalid offsets: {detail}"),
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for BlockError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_value_and_bound() {
        let err = BlockError::index_out_of_range(300, 255);
        assert_eq!(
            err.to_string(),
            "index 300 exceeds numeric bound of current type (max 255)"
        );
        let err = BlockError::field_out_of_range(70_000, 65_535);
        assert!(err.to_string().starts_with("field 70000"));
    }

    #[test]
    fn layout_message_depends_on_stored_side() {
        let with = BlockError::ValueLayoutMismatch {
            array: "value",
            stored: true,
        };
        let without = BlockError::ValueLayoutMismatch {
            array: "value",
            stored: false,
        };
        assert_ne!(with.to_string(), without.to_string());
    }
}
