//! Append-only CSR storage for sparse training rows.
//!
//! Rows are pushed one at a time or merged a block at a time into
//! growable containers, handed to numeric code as borrowed views, and
//! streamed to and from a compact binary format.
//!
//! # Architecture
//!
//! - [`UnitBlockContainer`] stores offset/index/value for a single namespace
//! - [`RowBlockContainer`] adds labels, weights, session ids, field ids and
//!   one [`UnitBlockContainer`] per auxiliary namespace
//! - [`UnitBlock`] and [`RowBlock`] are zero-copy views produced by
//!   `get_block()` and accepted by `push_block()`
//! - [`BlockWriter`] and [`BlockReader`] stream consecutive blocks
//!
//! Every push is all-or-nothing: an index that does not fit the
//! container's index type is reported as a [`BlockError`] and nothing
//! is appended.
//!
//! # Format
//!
//! ```text
//! [offset] [label] [weight] [qid] [field] [index] [value] [max_field] [max_index]
//! ```
//!
//! Each bracketed array is a `u64` element count followed by packed
//! little-endian elements; the two maxima are bare `I`-width scalars.
//! Blocks are concatenated with no separator.
//!
//! [`BlockError`]: rowblock_core::BlockError

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod error;
mod persist;
pub mod reader;
pub mod row_block;
pub mod unit;
pub mod view;
pub mod writer;

pub use config::RowBlockConfig;
pub use error::CodecError;
pub use reader::{BlockIter, BlockReader};
pub use row_block::RowBlockContainer;
pub use unit::UnitBlockContainer;
pub use view::{RowBlock, RowBlockParts, UnitBlock};
pub use writer::BlockWriter;
