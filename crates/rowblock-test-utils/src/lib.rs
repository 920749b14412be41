//! Test fixtures and seeded generators for rowblock development.
//!
//! Containers only accept borrowed rows, so tests need somewhere to keep
//! the backing arrays. [`OwnedRow`] holds them and lends out a
//! [`Row`](rowblock_core::Row); [`RowGenerator`] produces reproducible
//! streams of them from a seed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{sample_unit_rows, OwnedRow, OwnedUnitRow, RowGenerator};
