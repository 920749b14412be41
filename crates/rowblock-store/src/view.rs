//! Read-only views over CSR row blocks.
//!
//! [`UnitBlock`] and [`RowBlock`] bundle borrowed slices. They are what
//! `get_block()` hands to numeric consumers and what `push_block()`
//! accepts as a merge source. The borrow ties a view to its container:
//! the container cannot be mutated while a view is alive.
//!
//! # Offsets
//!
//! Offsets are absolute positions into the view's `index`, `value` and
//! `field` slices. Row `i` owns entries `offset[i]..offset[i + 1]`. A
//! sub-range produced by [`RowBlock::slice`] keeps the parent's entry
//! slices, so its `offset[0]` is generally non-zero.

use std::mem::size_of;
use std::ops::Range;

use rowblock_core::{BlockError, Element, Index, Real, Row, UnitRow};
use smallvec::SmallVec;

/// Check that `offset` is a usable row-boundary array for `entries` entries.
pub(crate) fn validate_offsets(offset: &[usize], entries: usize) -> Result<(), BlockError> {
    let Some(&last) = offset.last() else {
        return Err(BlockError::InvalidOffsets {
            detail: "offset array is empty".into(),
        });
    };
    if let Some(pos) = offset.windows(2).position(|w| w[0] > w[1]) {
        return Err(BlockError::InvalidOffsets {
            detail: format!(
                "offset decreases at row {pos}: {} > {}",
                offset[pos],
                offset[pos + 1]
            ),
        });
    }
    if last > entries {
        return Err(BlockError::InvalidOffsets {
            detail: format!("last offset {last} exceeds {entries} entries"),
        });
    }
    Ok(())
}

fn check_entry_array(array: &'static str, len: usize, entries: usize) -> Result<(), BlockError> {
    if len != 0 && len != entries {
        return Err(BlockError::LengthMismatch {
            array,
            expected: entries,
            found: len,
        });
    }
    Ok(())
}

fn max_of<I: Index>(ids: &[I]) -> Option<I> {
    ids.iter().copied().max()
}

// ── UnitBlock ───────────────────────────────────────────────────

/// Read-only view of a block of unit rows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitBlock<'a, I, V = Real> {
    offset: &'a [usize],
    index: &'a [I],
    value: &'a [V],
}

impl<'a, I: Index, V: Element> UnitBlock<'a, I, V> {
    /// Build a view over external CSR arrays.
    ///
    /// `offset` must be non-empty, non-decreasing and end within `index`;
    /// `value` must be empty or as long as `index`.
    pub fn from_parts(
        offset: &'a [usize],
        index: &'a [I],
        value: &'a [V],
    ) -> Result<Self, BlockError> {
        validate_offsets(offset, index.len())?;
        check_entry_array("value", value.len(), index.len())?;
        Ok(Self::new_unchecked(offset, index, value))
    }

    pub(crate) fn new_unchecked(offset: &'a [usize], index: &'a [I], value: &'a [V]) -> Self {
        Self {
            offset,
            index,
            value,
        }
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.offset.len() - 1
    }

    /// Whether the view has no rows.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Row boundaries, `size() + 1` entries.
    pub fn offset(&self) -> &'a [usize] {
        self.offset
    }

    /// The backing index slice (may extend beyond this view's rows).
    pub fn index(&self) -> &'a [I] {
        self.index
    }

    /// The backing value slice, or `None` if entries carry no values.
    pub fn value(&self) -> Option<&'a [V]> {
        (!self.value.is_empty()).then_some(self.value)
    }

    /// Positions in the entry slices spanned by this view's rows.
    pub fn entry_range(&self) -> Range<usize> {
        self.offset[0]..self.offset[self.size()]
    }

    /// Number of entries spanned by this view's rows.
    pub fn nnz(&self) -> usize {
        self.entry_range().len()
    }

    /// Row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.size()`.
    pub fn row(&self, i: usize) -> UnitRow<'a, I, V> {
        let (begin, end) = (self.offset[i], self.offset[i + 1]);
        UnitRow {
            index: &self.index[begin..end],
            value: self.value().map(|v| &v[begin..end]),
        }
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = UnitRow<'a, I, V>> + 'a {
        let view = *self;
        (0..view.size()).map(move |i| view.row(i))
    }

    /// Rows `begin..end` as a new view over the same entry slices.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end` or `end > self.size()`.
    pub fn slice(&self, begin: usize, end: usize) -> Self {
        assert!(
            begin <= end && end <= self.size(),
            "slice {begin}..{end} out of bounds for {} rows",
            self.size()
        );
        Self::new_unchecked(&self.offset[begin..=end], self.index, self.value)
    }

    /// Largest index among this view's entries.
    pub fn max_index(&self) -> Option<I> {
        max_of(&self.index[self.entry_range()])
    }

    /// Bytes referenced by this view's rows.
    pub fn mem_cost_bytes(&self) -> usize {
        let nnz = self.nnz();
        let value_bytes = if self.value.is_empty() { 0 } else { nnz * size_of::<V>() };
        self.offset.len() * size_of::<usize>() + nnz * size_of::<I>() + value_bytes
    }
}

// ── RowBlock ────────────────────────────────────────────────────

/// Borrowed arrays for [`RowBlock::from_parts`].
#[derive(Clone, Debug, Default)]
pub struct RowBlockParts<'a, I, V = Real> {
    /// Labels per row.
    pub label_width: usize,
    /// Row boundaries.
    pub offset: &'a [usize],
    /// `size * label_width` labels.
    pub label: &'a [V],
    /// Per-row weights; empty, or exactly one per row.
    pub weight: &'a [Real],
    /// Per-row session ids; empty, or exactly one per row.
    pub qid: &'a [u64],
    /// Per-entry field ids; empty or parallel to `index`.
    pub field: &'a [I],
    /// Per-entry feature indices.
    pub index: &'a [I],
    /// Per-entry values; empty or parallel to `index`.
    pub value: &'a [V],
    /// One unit block per auxiliary namespace, each with `size` rows.
    pub extra: SmallVec<[UnitBlock<'a, I, V>; 2]>,
}

/// Read-only view of a block of instances.
#[derive(Clone, Debug, PartialEq)]
pub struct RowBlock<'a, I, V = Real> {
    label_width: usize,
    offset: &'a [usize],
    label: &'a [V],
    weight: &'a [Real],
    qid: &'a [u64],
    field: &'a [I],
    index: &'a [I],
    value: &'a [V],
    extra: SmallVec<[UnitBlock<'a, I, V>; 2]>,
}

impl<'a, I: Index, V: Element> RowBlock<'a, I, V> {
    /// Build a view over external arrays, validating every length.
    pub fn from_parts(parts: RowBlockParts<'a, I, V>) -> Result<Self, BlockError> {
        if parts.label_width == 0 {
            return Err(BlockError::InvalidConfig {
                reason: "label_width must be at least 1".into(),
            });
        }
        let entries = parts.index.len();
        validate_offsets(parts.offset, entries)?;
        let size = parts.offset.len() - 1;

        let labels = size * parts.label_width;
        if parts.label.len() != labels {
            return Err(BlockError::LengthMismatch {
                array: "label",
                expected: labels,
                found: parts.label.len(),
            });
        }
        for (array, len) in [("weight", parts.weight.len()), ("qid", parts.qid.len())] {
            if len != 0 && len != size {
                return Err(BlockError::LengthMismatch {
                    array,
                    expected: size,
                    found: len,
                });
            }
        }
        check_entry_array("field", parts.field.len(), entries)?;
        check_entry_array("value", parts.value.len(), entries)?;
        for (slot, extra) in parts.extra.iter().enumerate() {
            if extra.size() != size {
                return Err(BlockError::ExtraMisaligned {
                    slot,
                    parent_rows: size,
                    extra_rows: extra.size(),
                });
            }
        }
        Ok(Self::from_parts_unchecked(parts))
    }

    pub(crate) fn from_parts_unchecked(parts: RowBlockParts<'a, I, V>) -> Self {
        Self {
            label_width: parts.label_width,
            offset: parts.offset,
            label: parts.label,
            weight: parts.weight,
            qid: parts.qid,
            field: parts.field,
            index: parts.index,
            value: parts.value,
            extra: parts.extra,
        }
    }

    /// Labels per row.
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Number of rows.
    pub fn size(&self) -> usize {
        self.offset.len() - 1
    }

    /// Whether the view has no rows.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Row boundaries, `size() + 1` entries.
    pub fn offset(&self) -> &'a [usize] {
        self.offset
    }

    /// `size() * label_width()` labels, row-major.
    pub fn label(&self) -> &'a [V] {
        self.label
    }

    /// Per-row weights. Either empty or one per row.
    pub fn weight(&self) -> &'a [Real] {
        self.weight
    }

    /// Per-row session ids, with the same length rules as [`weight`](Self::weight).
    pub fn qid(&self) -> &'a [u64] {
        self.qid
    }

    /// The backing field-id slice, or `None` if entries carry no field ids.
    pub fn field(&self) -> Option<&'a [I]> {
        (!self.field.is_empty()).then_some(self.field)
    }

    /// The backing index slice (may extend beyond this view's rows).
    pub fn index(&self) -> &'a [I] {
        self.index
    }

    /// The backing value slice, or `None` if entries carry no values.
    pub fn value(&self) -> Option<&'a [V]> {
        (!self.value.is_empty()).then_some(self.value)
    }

    /// Auxiliary namespace blocks, row-aligned with this block.
    pub fn extras(&self) -> &[UnitBlock<'a, I, V>] {
        &self.extra
    }

    /// Auxiliary block `slot`, if configured.
    pub fn extra(&self, slot: usize) -> Option<&UnitBlock<'a, I, V>> {
        self.extra.get(slot)
    }

    /// Positions in the entry slices spanned by this view's rows.
    pub fn entry_range(&self) -> Range<usize> {
        self.offset[0]..self.offset[self.size()]
    }

    /// Number of entries spanned by this view's rows.
    pub fn nnz(&self) -> usize {
        self.entry_range().len()
    }

    /// Row `i`, including its auxiliary sub-rows.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.size()`.
    pub fn row(&self, i: usize) -> Row<'a, I, V> {
        let (begin, end) = (self.offset[i], self.offset[i + 1]);
        let w = self.label_width;
        Row {
            label: &self.label[i * w..(i + 1) * w],
            weight: self.weight.get(i).copied(),
            qid: self.qid.get(i).copied(),
            field: self.field().map(|f| &f[begin..end]),
            index: &self.index[begin..end],
            value: self.value().map(|v| &v[begin..end]),
            extra: self.extra.iter().map(|e| e.row(i)).collect(),
        }
    }

    /// Iterate over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a, I, V>> + '_ {
        (0..self.size()).map(move |i| self.row(i))
    }

    /// Rows `begin..end` as a new view over the same entry slices.
    ///
    /// Weights and session ids stay empty if they were empty.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end` or `end > self.size()`.
    pub fn slice(&self, begin: usize, end: usize) -> Self {
        assert!(
            begin <= end && end <= self.size(),
            "slice {begin}..{end} out of bounds for {} rows",
            self.size()
        );
        let w = self.label_width;
        let rows = |len: usize| if len == 0 { 0..0 } else { begin..end };
        Self {
            label_width: w,
            offset: &self.offset[begin..=end],
            label: &self.label[begin * w..end * w],
            weight: &self.weight[rows(self.weight.len())],
            qid: &self.qid[rows(self.qid.len())],
            field: self.field,
            index: self.index,
            value: self.value,
            extra: self.extra.iter().map(|e| e.slice(begin, end)).collect(),
        }
    }

    /// Largest feature index among this view's entries.
    pub fn max_index(&self) -> Option<I> {
        max_of(&self.index[self.entry_range()])
    }

    /// Largest field id among this view's entries.
    pub fn max_field(&self) -> Option<I> {
        self.field().and_then(|f| max_of(&f[self.entry_range()]))
    }

    /// Bytes referenced by this view's rows, including extras.
    pub fn mem_cost_bytes(&self) -> usize {
        let nnz = self.nnz();
        let per_entry = |present: bool, width: usize| if present { nnz * width } else { 0 };
        self.extra.iter().map(UnitBlock::mem_cost_bytes).sum::<usize>()
            + self.offset.len() * size_of::<usize>()
            + self.label.len() * size_of::<V>()
            + self.weight.len() * size_of::<Real>()
            + self.qid.len() * size_of::<u64>()
            + per_entry(!self.field.is_empty(), size_of::<I>())
            + nnz * size_of::<I>()
            + per_entry(!self.value.is_empty(), size_of::<V>())
    }
}
