//! Core types and traits for the rowblock sparse row store.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the rowblock workspace:
//! the fixed-width scalar traits, borrowed input rows, and the
//! recoverable error type returned by every push operation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod row;

pub use element::{Element, Index, Real};
pub use error::{BlockError, IdKind};
pub use row::{Row, UnitRow};
