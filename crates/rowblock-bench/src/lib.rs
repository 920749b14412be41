//! Benchmark profiles for the rowblock sparse row store.
//!
//! - [`reference_rows`]: a seeded stream of field-aware rows
//! - [`reference_block`]: the same rows pushed into a container

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rowblock_core::BlockError;
use rowblock_store::RowBlockContainer;
use rowblock_test_utils::{OwnedRow, RowGenerator};

/// Rows with up to 32 entries, indices below 2^20 and 16 fields.
pub fn reference_rows(seed: u64, n: usize) -> Vec<OwnedRow<u32>> {
    RowGenerator::new(seed)
        .with_max_len(32)
        .with_max_index((1 << 20) - 1)
        .with_fields(15)
        .rows(n)
}

/// [`reference_rows`] pushed one at a time into a fresh container.
pub fn reference_block(seed: u64, n: usize) -> Result<RowBlockContainer<u32>, BlockError> {
    let mut block = RowBlockContainer::new();
    for row in reference_rows(seed, n) {
        block.push(&row.as_row())?;
    }
    Ok(block)
}
