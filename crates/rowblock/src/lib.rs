//! Rowblock: append-only CSR storage for sparse machine-learning rows.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the rowblock sub-crates. For most users, adding `rowblock` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rowblock::prelude::*;
//!
//! let config = RowBlockConfig::new().with_extra("user");
//! let mut block = RowBlockContainer::<u32>::with_config(config).unwrap();
//! block
//!     .push(
//!         &Row::new(&[1.0], &[3u32, 17], &[0.5, 1.5])
//!             .with_qid(4)
//!             .with_extra(UnitRow::indices_only(&[9u32])),
//!     )
//!     .unwrap();
//!
//! // Merge into a narrower container; every index is range checked.
//! let mut narrow = RowBlockContainer::<u8>::with_config(block.config()).unwrap();
//! narrow.push_block(&block.get_block()).unwrap();
//! assert_eq!(narrow.max_index(), 17);
//!
//! // Stream it out and back in.
//! let mut writer = BlockWriter::new(Vec::new());
//! writer.write_block(&narrow).unwrap();
//! let buf = writer.into_inner();
//! let mut reader = BlockReader::new(buf.as_slice());
//! let mut loaded = RowBlockContainer::<u8>::new();
//! assert!(reader.next_block(&mut loaded).unwrap());
//! assert_eq!(loaded.get_block().row(0).index, &[3, 17]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `rowblock-core` | Scalar traits, input rows, `BlockError` |
//! | [`store`] | `rowblock-store` | Containers, views, codec, block streams |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Scalar traits, borrowed input rows and errors (`rowblock-core`).
///
/// [`types::Index`] bounds the identifier types a container can hold;
/// [`types::Row`] and [`types::UnitRow`] are what `push` accepts.
pub use rowblock_core as types;

/// Containers, views and persistence (`rowblock-store`).
pub use rowblock_store as store;

/// Common imports for typical rowblock usage.
///
/// ```rust
/// use rowblock::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use rowblock_core::{Element, Index, Real, Row, UnitRow};

    // Errors
    pub use rowblock_core::BlockError;
    pub use rowblock_store::CodecError;

    // Containers and views
    pub use rowblock_store::{
        RowBlock, RowBlockConfig, RowBlockContainer, UnitBlock, UnitBlockContainer,
    };

    // Streams
    pub use rowblock_store::{BlockReader, BlockWriter};
}
