//! Growable container for a block of unit rows.
//!
//! [`UnitBlockContainer`] owns an offset/index/value triple and a running
//! maximum index. It is used on its own and as the storage behind each
//! auxiliary namespace of a `RowBlockContainer`.

use std::mem::size_of;

use rowblock_core::{BlockError, Element, IdKind, Index, Real, UnitRow};
use tracing::trace;

use crate::view::UnitBlock;

/// Append `src` to `dst`, range checking every element against `I::MAX`
/// before it is stored and folding it into `max`.
///
/// On error, elements before the offending one have already been pushed;
/// callers roll back.
pub(crate) fn extend_checked<I: Index, J: Index>(
    dst: &mut Vec<I>,
    max: &mut I,
    src: &[J],
    kind: IdKind,
) -> Result<(), BlockError> {
    dst.reserve(src.len());
    for &id in src {
        let id = I::convert_from(id).map_err(|value| BlockError::IdOutOfRange {
            kind,
            value,
            max: I::MAX,
        })?;
        dst.push(id);
        *max = (*max).max(id);
    }
    Ok(())
}

/// Reject incoming entries whose optional per-entry array disagrees with
/// what is already stored: it must be present for all entries or none.
pub(crate) fn check_layout(
    array: &'static str,
    stored_len: usize,
    entries: usize,
    incoming: bool,
    incoming_entries: usize,
) -> Result<(), BlockError> {
    if entries == 0 || incoming_entries == 0 {
        return Ok(());
    }
    let stored = stored_len != 0;
    if stored != incoming {
        return Err(BlockError::ValueLayoutMismatch { array, stored });
    }
    Ok(())
}

/// Array lengths and maximum captured before a push, for rollback.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnitMark<I> {
    rows: usize,
    entries: usize,
    values: usize,
    max_index: I,
}

/// Append-only CSR storage for unit rows.
///
/// # Examples
///
/// ```
/// use rowblock_core::UnitRow;
/// use rowblock_store::UnitBlockContainer;
///
/// let mut block = UnitBlockContainer::<u32>::new();
/// block.push(&UnitRow::new(&[1u32, 3], &[1.0, 1.0])).unwrap();
/// block.push(&UnitRow::new(&[2u32], &[2.0])).unwrap();
///
/// let view = block.get_block();
/// assert_eq!(view.size(), 2);
/// assert_eq!(view.offset(), &[0, 2, 3]);
/// assert_eq!(block.max_index(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UnitBlockContainer<I, V = Real> {
    offset: Vec<usize>,
    index: Vec<I>,
    value: Vec<V>,
    max_index: I,
}

impl<I: Index, V: Element> UnitBlockContainer<I, V> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            offset: vec![0],
            index: Vec::new(),
            value: Vec::new(),
            max_index: I::default(),
        }
    }

    /// Reset to the empty state, keeping allocated capacity.
    pub fn clear(&mut self) {
        self.offset.clear();
        self.offset.push(0);
        self.index.clear();
        self.value.clear();
        self.max_index = I::default();
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.offset.len() - 1
    }

    /// Whether the container holds no rows.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.index.len()
    }

    /// Largest index ever pushed (0 when empty).
    pub fn max_index(&self) -> I {
        self.max_index
    }

    /// Bytes held by the offset, index and value arrays.
    ///
    /// Counts lengths, not capacities.
    pub fn mem_cost_bytes(&self) -> usize {
        self.offset.len() * size_of::<usize>()
            + self.index.len() * size_of::<I>()
            + self.value.len() * size_of::<V>()
    }

    /// Append one row, converting indices from `J` with a range check.
    ///
    /// Values are appended only if the row carries them. On error the
    /// container is left unchanged.
    pub fn push<J: Index>(&mut self, row: &UnitRow<'_, J, V>) -> Result<(), BlockError> {
        row.validate()?;
        check_layout(
            "value",
            self.value.len(),
            self.index.len(),
            row.value.is_some(),
            row.len(),
        )?;
        let mark = self.mark();
        if let Err(e) = extend_checked(&mut self.index, &mut self.max_index, row.index, IdKind::Index)
        {
            trace!(error = %e, "unit row rejected");
            self.rollback(mark);
            return Err(e);
        }
        if let Some(value) = row.value {
            self.value.extend_from_slice(value);
        }
        self.offset.push(self.index.len());
        Ok(())
    }

    /// Merge a whole block, which must have exactly `expected_size` rows.
    ///
    /// The block may be a sub-range view: the entries spanned by its
    /// offsets are copied and its offsets are rebased onto this
    /// container's tail. On error the container is left unchanged.
    pub fn push_block<J: Index>(
        &mut self,
        batch: &UnitBlock<'_, J, V>,
        expected_size: usize,
    ) -> Result<(), BlockError> {
        if batch.size() != expected_size {
            return Err(BlockError::SizeMismatch {
                declared: expected_size,
                actual: batch.size(),
            });
        }
        let range = batch.entry_range();
        let values = batch.value().map(|v| &v[range.clone()]);
        check_layout(
            "value",
            self.value.len(),
            self.index.len(),
            values.is_some(),
            range.len(),
        )?;

        let mark = self.mark();
        if let Err(e) = extend_checked(
            &mut self.index,
            &mut self.max_index,
            &batch.index()[range],
            IdKind::Index,
        ) {
            trace!(error = %e, rows = batch.size(), "unit block rejected");
            self.rollback(mark);
            return Err(e);
        }
        if let Some(values) = values {
            self.value.extend_from_slice(values);
        }
        let shift = mark.entries;
        let base = batch.offset()[0];
        self.offset
            .extend(batch.offset()[1..].iter().map(|&o| shift + (o - base)));
        Ok(())
    }

    /// Borrow the contents as a read-only view.
    ///
    /// # Panics
    ///
    /// Panics if the offset, index and value arrays disagree. Every push
    /// path preserves these invariants, so a panic here is a bug.
    pub fn get_block(&self) -> UnitBlock<'_, I, V> {
        self.check_consistency();
        UnitBlock::new_unchecked(&self.offset, &self.index, &self.value)
    }

    pub(crate) fn check_consistency(&self) {
        assert_eq!(
            self.offset.last().copied(),
            Some(self.index.len()),
            "last offset must equal index length"
        );
        assert!(
            self.value.is_empty() || self.value.len() == self.index.len(),
            "value length {} must be 0 or index length {}",
            self.value.len(),
            self.index.len()
        );
    }

    pub(crate) fn mark(&self) -> UnitMark<I> {
        UnitMark {
            rows: self.offset.len(),
            entries: self.index.len(),
            values: self.value.len(),
            max_index: self.max_index,
        }
    }

    pub(crate) fn rollback(&mut self, mark: UnitMark<I>) {
        self.offset.truncate(mark.rows);
        self.index.truncate(mark.entries);
        self.value.truncate(mark.values);
        self.max_index = mark.max_index;
    }
}

impl<I: Index, V: Element> Default for UnitBlockContainer<I, V> {
    fn default() -> Self {
        Self::new()
    }
}
