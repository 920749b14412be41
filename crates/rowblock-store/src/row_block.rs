//! Growable container for a block of instances.
//!
//! [`RowBlockContainer`] stores labels, weights, session ids, per-entry
//! field ids and the CSR index/value triple, plus one
//! [`UnitBlockContainer`] per configured auxiliary namespace. Rows and
//! blocks are appended; nothing is ever removed except by [`clear`].
//!
//! [`clear`]: RowBlockContainer::clear

use std::mem::size_of;

use indexmap::IndexMap;
use rowblock_core::{BlockError, Element, IdKind, Index, Real, Row};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::config::RowBlockConfig;
use crate::unit::{check_layout, extend_checked, UnitBlockContainer, UnitMark};
use crate::view::{RowBlock, RowBlockParts};

/// Array lengths and maxima captured before a push, for rollback.
struct RowMark<I> {
    rows: usize,
    labels: usize,
    weights: usize,
    qids: usize,
    fields: usize,
    entries: usize,
    values: usize,
    max_field: I,
    max_index: I,
    extras: SmallVec<[UnitMark<I>; 2]>,
}

/// Append-only CSR storage for labelled instances.
///
/// `I` is the index and field id type, `V` the value and label type.
///
/// # Examples
///
/// ```
/// use rowblock_core::Row;
/// use rowblock_store::RowBlockContainer;
///
/// let mut block = RowBlockContainer::<u32>::new();
/// block.push(&Row::new(&[1.0], &[1u32, 3], &[1.0, 1.0])).unwrap();
/// block.push(&Row::new(&[0.0], &[2u32], &[2.0]).with_weight(0.5)).unwrap();
///
/// let view = block.get_block();
/// assert_eq!(view.size(), 2);
/// assert_eq!(view.label(), &[1.0, 0.0]);
/// assert_eq!(view.weight(), &[1.0, 0.5]);
/// ```
#[derive(Clone, Debug)]
pub struct RowBlockContainer<I, V = Real> {
    pub(crate) offset: Vec<usize>,
    pub(crate) label_width: usize,
    pub(crate) label: Vec<V>,
    pub(crate) weight: Vec<Real>,
    pub(crate) qid: Vec<u64>,
    pub(crate) field: Vec<I>,
    pub(crate) index: Vec<I>,
    pub(crate) value: Vec<V>,
    pub(crate) max_field: I,
    pub(crate) max_index: I,
    pub(crate) extra: IndexMap<String, UnitBlockContainer<I, V>>,
}

impl<I: Index, V: Element> RowBlockContainer<I, V> {
    /// Create an empty container with one label per row and no extras.
    pub fn new() -> Self {
        Self {
            offset: vec![0],
            label_width: RowBlockConfig::DEFAULT_LABEL_WIDTH,
            label: Vec::new(),
            weight: Vec::new(),
            qid: Vec::new(),
            field: Vec::new(),
            index: Vec::new(),
            value: Vec::new(),
            max_field: I::default(),
            max_index: I::default(),
            extra: IndexMap::new(),
        }
    }

    /// Create an empty container from a validated configuration.
    pub fn with_config(config: RowBlockConfig) -> Result<Self, BlockError> {
        config.validate()?;
        let mut block = Self::new();
        block.label_width = config.label_width;
        block.extra = config
            .extras
            .into_iter()
            .map(|name| (name, UnitBlockContainer::new()))
            .collect();
        Ok(block)
    }

    /// The configuration this container was built with.
    pub fn config(&self) -> RowBlockConfig {
        RowBlockConfig {
            label_width: self.label_width,
            extras: self.extra.keys().cloned().collect(),
        }
    }

    /// Reset every array (and every extra) to the empty state.
    pub fn clear(&mut self) {
        debug!(rows = self.size(), entries = self.nnz(), "clearing row block");
        self.offset.clear();
        self.offset.push(0);
        self.label.clear();
        self.weight.clear();
        self.qid.clear();
        self.field.clear();
        self.index.clear();
        self.value.clear();
        self.max_field = I::default();
        self.max_index = I::default();
        for extra in self.extra.values_mut() {
            extra.clear();
        }
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

    /// Labels per row.
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    /// Largest feature index ever pushed (0 when empty).
    pub fn max_index(&self) -> I {
        self.max_index
    }

    /// Largest field id ever pushed (0 when empty).
    pub fn max_field(&self) -> I {
        self.max_field
    }

    /// Number of auxiliary namespaces.
    pub fn extra_count(&self) -> usize {
        self.extra.len()
    }

    /// Auxiliary block at position `slot`.
    pub fn extra(&self, slot: usize) -> Option<&UnitBlockContainer<I, V>> {
        self.extra.get_index(slot).map(|(_, block)| block)
    }

    /// Auxiliary block for namespace `name`.
    pub fn extra_by_name(&self, name: &str) -> Option<&UnitBlockContainer<I, V>> {
        self.extra.get(name)
    }

    /// Namespace names in slot order.
    pub fn extra_names(&self) -> impl Iterator<Item = &str> {
        self.extra.keys().map(String::as_str)
    }

    /// Bytes held by every array, including extras.
    ///
    /// Counts lengths, not capacities.
    pub fn mem_cost_bytes(&self) -> usize {
        self.extra
            .values()
            .map(UnitBlockContainer::mem_cost_bytes)
            .sum::<usize>()
            + self.offset.len() * size_of::<usize>()
            + self.label.len() * size_of::<V>()
            + self.weight.len() * size_of::<Real>()
            + self.qid.len() * size_of::<u64>()
            + self.field.len() * size_of::<I>()
            + self.index.len() * size_of::<I>()
            + self.value.len() * size_of::<V>()
    }

    /// Append one row, converting ids from `J` with a range check.
    ///
    /// A weight and a session id are always recorded, defaulting to 1.0
    /// and 0, so a row cannot follow rows merged without them
    /// (`ValueLayoutMismatch`). Field ids and values are appended only if
    /// the row carries them. The row must supply exactly `label_width` labels and one
    /// sub-row per extra. On error the container is left unchanged.
    pub fn push<J: Index>(&mut self, row: &Row<'_, J, V>) -> Result<(), BlockError> {
        row.validate()?;
        if row.label.len() != self.label_width {
            return Err(BlockError::LabelWidthMismatch {
                expected: self.label_width,
                found: row.label.len(),
            });
        }
        if row.extra.len() != self.extra.len() {
            return Err(BlockError::ExtraCountMismatch {
                expected: self.extra.len(),
                found: row.extra.len(),
            });
        }
        self.check_extras_aligned()?;

        let mark = self.mark();
        let result = self.append_row(row);
        if let Err(e) = &result {
            trace!(error = %e, "row rejected");
            self.rollback(mark);
        }
        result
    }

    fn append_row<J: Index>(&mut self, row: &Row<'_, J, V>) -> Result<(), BlockError> {
        let rows = self.size();
        let entries = self.index.len();
        check_layout("weight", self.weight.len(), rows, true, 1)?;
        check_layout("qid", self.qid.len(), rows, true, 1)?;
        check_layout("field", self.field.len(), entries, row.field.is_some(), row.len())?;
        check_layout("value", self.value.len(), entries, row.value.is_some(), row.len())?;

        self.label.extend_from_slice(row.label);
        self.weight.push(row.get_weight());
        self.qid.push(row.get_qid());
        if let Some(field) = row.field {
            extend_checked(&mut self.field, &mut self.max_field, field, IdKind::Field)?;
        }
        extend_checked(&mut self.index, &mut self.max_index, row.index, IdKind::Index)?;
        if let Some(value) = row.value {
            self.value.extend_from_slice(value);
        }
        for (extra, sub) in self.extra.values_mut().zip(&row.extra) {
            extra.push(sub)?;
        }
        self.offset.push(self.index.len());
        Ok(())
    }

    /// Merge a whole block, converting ids from `J` with a range check.
    ///
    /// Labels are copied verbatim and the label widths must match.
    /// Weights and session ids follow the same all-or-none rule per row
    /// that values and field ids follow per entry: a block without them
    /// can only join a container that has none, and the reverse. Each of
    /// the block's extras is merged into the matching extra here, which
    /// must still be row-aligned with this container. On error the
    /// container is left unchanged.
    pub fn push_block<J: Index>(&mut self, batch: &RowBlock<'_, J, V>) -> Result<(), BlockError> {
        if batch.label_width() != self.label_width {
            return Err(BlockError::LabelWidthMismatch {
                expected: self.label_width,
                found: batch.label_width(),
            });
        }
        if batch.extras().len() != self.extra.len() {
            return Err(BlockError::ExtraCountMismatch {
                expected: self.extra.len(),
                found: batch.extras().len(),
            });
        }
        self.check_extras_aligned()?;

        let mark = self.mark();
        let result = self.append_block(batch);
        if let Err(e) = &result {
            trace!(error = %e, rows = batch.size(), "row block rejected");
            self.rollback(mark);
        }
        result
    }

    fn append_block<J: Index>(&mut self, batch: &RowBlock<'_, J, V>) -> Result<(), BlockError> {
        let rows = self.size();
        let entries = self.index.len();
        let range = batch.entry_range();
        let field = batch.field().map(|f| &f[range.clone()]);
        let value = batch.value().map(|v| &v[range.clone()]);
        let (weight, qid) = (batch.weight(), batch.qid());
        check_layout("weight", self.weight.len(), rows, !weight.is_empty(), batch.size())?;
        check_layout("qid", self.qid.len(), rows, !qid.is_empty(), batch.size())?;
        check_layout("field", self.field.len(), entries, field.is_some(), range.len())?;
        check_layout("value", self.value.len(), entries, value.is_some(), range.len())?;

        self.label.extend_from_slice(batch.label());
        self.weight.extend_from_slice(weight);
        self.qid.extend_from_slice(qid);
        if let Some(field) = field {
            extend_checked(&mut self.field, &mut self.max_field, field, IdKind::Field)?;
        }
        extend_checked(
            &mut self.index,
            &mut self.max_index,
            &batch.index()[range],
            IdKind::Index,
        )?;
        if let Some(value) = value {
            self.value.extend_from_slice(value);
        }
        let base = batch.offset()[0];
        self.offset
            .extend(batch.offset()[1..].iter().map(|&o| entries + (o - base)));

        for (extra, sub) in self.extra.values_mut().zip(batch.extras()) {
            extra.push_block(sub, batch.size())?;
        }
        Ok(())
    }

    /// Borrow the contents as a read-only view, extras included.
    ///
    /// # Panics
    ///
    /// Panics if the label, weight, qid, offset, index and value arrays
    /// disagree.
    /// Every push and load path preserves these invariants, so a panic
    /// here is a bug.
    pub fn get_block(&self) -> RowBlock<'_, I, V> {
        self.check_consistency();
        RowBlock::from_parts_unchecked(RowBlockParts {
            label_width: self.label_width,
            offset: &self.offset,
            label: &self.label,
            weight: &self.weight,
            qid: &self.qid,
            field: &self.field,
            index: &self.index,
            value: &self.value,
            extra: self.extra.values().map(UnitBlockContainer::get_block).collect(),
        })
    }

    pub(crate) fn check_consistency(&self) {
        if !self.label.is_empty() {
            assert_eq!(
                self.label.len() / self.label_width + 1,
                self.offset.len(),
                "label count {} with width {} does not match {} rows",
                self.label.len(),
                self.label_width,
                self.size()
            );
        }
        assert_eq!(
            self.offset.last().copied(),
            Some(self.index.len()),
            "last offset must equal index length"
        );
        for (array, len) in [("weight", self.weight.len()), ("qid", self.qid.len())] {
            assert!(
                len == 0 || len == self.size(),
                "{array} length {len} must be 0 or row count {}",
                self.size()
            );
        }
        assert!(
            self.value.is_empty() || self.value.len() == self.index.len(),
            "value length {} must be 0 or index length {}",
            self.value.len(),
            self.index.len()
        );
    }

    fn check_extras_aligned(&self) -> Result<(), BlockError> {
        let parent_rows = self.size();
        for (slot, extra) in self.extra.values().enumerate() {
            if extra.size() != parent_rows {
                return Err(BlockError::ExtraMisaligned {
                    slot,
                    parent_rows,
                    extra_rows: extra.size(),
                });
            }
        }
        Ok(())
    }

    fn mark(&self) -> RowMark<I> {
        RowMark {
            rows: self.offset.len(),
            labels: self.label.len(),
            weights: self.weight.len(),
            qids: self.qid.len(),
            fields: self.field.len(),
            entries: self.index.len(),
            values: self.value.len(),
            max_field: self.max_field,
            max_index: self.max_index,
            extras: self.extra.values().map(UnitBlockContainer::mark).collect(),
        }
    }

    fn rollback(&mut self, mark: RowMark<I>) {
        self.offset.truncate(mark.rows);
        self.label.truncate(mark.labels);
        self.weight.truncate(mark.weights);
        self.qid.truncate(mark.qids);
        self.field.truncate(mark.fields);
        self.index.truncate(mark.entries);
        self.value.truncate(mark.values);
        self.max_field = mark.max_field;
        self.max_index = mark.max_index;
        for (extra, m) in self.extra.values_mut().zip(mark.extras) {
            extra.rollback(m);
        }
    }
}

impl<I: Index, V: Element> Default for RowBlockContainer<I, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rowblock_core::UnitRow;

    fn two_extras() -> RowBlockContainer<u32> {
        RowBlockContainer::with_config(
            RowBlockConfig::new().with_extra("dense").with_extra("cate"),
        )
        .unwrap()
    }

    #[test]
    fn push_records_defaults_for_weight_and_qid() {
        let mut block = RowBlockContainer::<u32>::new();
        block.push(&Row::new(&[1.0], &[1u32, 3], &[1.0, 1.0])).unwrap();
        block
            .push(&Row::new(&[0.0], &[2u32], &[2.0]).with_weight(3.0).with_qid(9))
            .unwrap();
        let view = block.get_block();
        assert_eq!(view.weight(), &[1.0, 3.0]);
        assert_eq!(view.qid(), &[0, 9]);
        assert_eq!(view.offset(), &[0, 2, 3]);
    }

    #[test]
    fn field_ids_tracked_with_max() {
        let mut block = RowBlockContainer::<u32>::new();
        block
            .push(&Row::new(&[1.0], &[10u32, 11], &[1.0, 1.0]).with_field(&[0, 4]))
            .unwrap();
        block
            .push(&Row::new(&[1.0], &[12u32], &[1.0]).with_field(&[2]))
            .unwrap();
        assert_eq!(block.max_field(), 4);
        assert_eq!(block.max_index(), 12);
        assert_eq!(block.get_block().field().unwrap(), &[0, 4, 2]);
    }

    #[test]
    fn field_out_of_range_rolls_back_row() {
        let mut block = RowBlockContainer::<u8>::new();
        block
            .push(&Row::new(&[1.0], &[1u32], &[1.0]).with_field(&[3]))
            .unwrap();
        let before = block.clone();
        let err = block
            .push(&Row::new(&[1.0], &[2u32], &[1.0]).with_field(&[256]))
            .unwrap_err();
        assert_eq!(err, BlockError::field_out_of_range(256, 255));
        assert_eq!(block.size(), before.size());
        assert_eq!(block.label, before.label);
        assert_eq!(block.weight, before.weight);
        assert_eq!(block.field, before.field);
        assert_eq!(block.max_field(), 3);
    }

    #[test]
    fn label_width_enforced_on_push() {
        let mut block =
            RowBlockContainer::<u32>::with_config(RowBlockConfig::new().with_label_width(2))
                .unwrap();
        let err = block
            .push(&Row::new(&[1.0], &[1u32], &[1.0]))
            .unwrap_err();
        assert_eq!(
            err,
            BlockError::LabelWidthMismatch {
                expected: 2,
                found: 1
            }
        );
        block.push(&Row::new(&[1.0, 2.0], &[1u32], &[1.0])).unwrap();
        assert_eq!(block.get_block().row(0).label, &[1.0, 2.0]);
    }

    #[test]
    fn extras_receive_sub_rows() {
        let mut block = two_extras();
        block
            .push(
                &Row::new(&[1.0], &[1u32], &[1.0])
                    .with_extra(UnitRow::new(&[5u32, 6], &[0.5, 0.5]))
                    .with_extra(UnitRow::indices_only(&[2u32])),
            )
            .unwrap();
        block
            .push(
                &Row::new(&[0.0], &[2u32], &[1.0])
                    .with_extra(UnitRow::new(&[], &[]))
                    .with_extra(UnitRow::indices_only(&[3u32, 4])),
            )
            .unwrap();

        let dense = block.extra_by_name("dense").unwrap();
        assert_eq!(dense.size(), 2);
        assert_eq!(dense.max_index(), 6);
        let cate = block.extra(1).unwrap().get_block();
        assert_eq!(cate.offset(), &[0, 1, 3]);
        assert_eq!(block.extra_names().collect::<Vec<_>>(), ["dense", "cate"]);

        let view = block.get_block();
        assert_eq!(view.extras().len(), 2);
        assert_eq!(view.row(1).extra[1].index, &[3, 4]);
    }

    #[test]
    fn extra_count_mismatch_rejected() {
        let mut block = two_extras();
        let err = block
            .push(&Row::new(&[1.0], &[1u32], &[1.0]).with_extra(UnitRow::indices_only(&[1u32])))
            .unwrap_err();
        assert_eq!(
            err,
            BlockError::ExtraCountMismatch {
                expected: 2,
                found: 1
            }
        );
        assert!(block.is_empty());
    }

    #[test]
    fn failing_extra_rolls_back_parent_and_earlier_extras() {
        let mut block = RowBlockContainer::<u8>::with_config(
            RowBlockConfig::new().with_extra("a").with_extra("b"),
        )
        .unwrap();
        let err = block
            .push(
                &Row::new(&[1.0], &[1u32], &[1.0])
                    .with_extra(UnitRow::indices_only(&[1u32]))
                    .with_extra(UnitRow::indices_only(&[999u32])),
            )
            .unwrap_err();
        assert_eq!(err, BlockError::index_out_of_range(999, 255));
        assert!(block.is_empty());
        assert_eq!(block.nnz(), 0);
        assert_eq!(block.extra(0).unwrap().nnz(), 0);
        assert!(block.label.is_empty());
        assert!(block.weight.is_empty());
    }

    #[test]
    fn push_block_copies_everything_and_rebases() {
        let mut source = two_extras();
        for i in 0..3u32 {
            source
                .push(
                    &Row::new(&[i as f32], &[i, i + 10], &[1.0, 2.0])
                        .with_weight(0.5)
                        .with_qid(u64::from(i))
                        .with_field(&[0, 1])
                        .with_extra(UnitRow::new(&[i], &[1.0]))
                        .with_extra(UnitRow::indices_only(&[])),
                )
                .unwrap();
        }

        let mut dest = two_extras();
        dest.push(
            &Row::new(&[9.0], &[7u32], &[0.0])
                .with_field(&[3])
                .with_extra(UnitRow::new(&[4], &[4.0]))
                .with_extra(UnitRow::indices_only(&[8])),
        )
        .unwrap();
        dest.push_block(&source.get_block().slice(1, 3)).unwrap();

        let view = dest.get_block();
        assert_eq!(view.size(), 3);
        assert_eq!(view.offset(), &[0, 1, 3, 5]);
        assert_eq!(view.index(), &[7, 1, 11, 2, 12]);
        assert_eq!(view.label(), &[9.0, 1.0, 2.0]);
        assert_eq!(view.weight(), &[1.0, 0.5, 0.5]);
        assert_eq!(view.qid(), &[0, 1, 2]);
        assert_eq!(view.field().unwrap(), &[3, 0, 1, 0, 1]);
        assert_eq!(dest.max_index(), 12);
        assert_eq!(dest.max_field(), 3);

        let dense = dest.extra(0).unwrap().get_block();
        assert_eq!(dense.size(), 3);
        assert_eq!(dense.offset(), &[0, 1, 2, 3]);
        assert_eq!(dense.index(), &[4, 1, 2]);
        assert_eq!(dest.extra(1).unwrap().get_block().offset(), &[0, 1, 1, 1]);
    }

    fn unweighted_batch<'a>(
        offset: &'a [usize],
        index: &'a [u32],
        label: &'a [f32],
    ) -> RowBlock<'a, u32> {
        RowBlock::from_parts(RowBlockParts {
            label_width: 1,
            offset,
            label,
            index,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn unweighted_batch_cannot_land_between_weighted_rows() {
        let mut block = RowBlockContainer::<u32>::new();
        block
            .push(&Row::indices_only(&[1.0], &[1u32]).with_weight(2.0))
            .unwrap();

        let err = block
            .push_block(&unweighted_batch(&[0, 1], &[3], &[0.0]))
            .unwrap_err();
        assert_eq!(
            err,
            BlockError::ValueLayoutMismatch {
                array: "weight",
                stored: true
            }
        );
        assert_eq!(block.size(), 1);
        assert_eq!(block.nnz(), 1);

        block
            .push(&Row::indices_only(&[0.0], &[2u32]).with_weight(5.0))
            .unwrap();
        let view = block.get_block();
        assert_eq!(view.size(), 2);
        assert_eq!(view.weight(), &[2.0, 5.0]);
        assert_eq!(view.row(0).weight, Some(2.0));
        assert_eq!(view.row(1).weight, Some(5.0));
        assert_eq!(view.row(1).index, &[2]);
    }

    #[test]
    fn rows_cannot_follow_unweighted_batch() {
        let mut block = RowBlockContainer::<u32>::new();
        block
            .push_block(&unweighted_batch(&[0, 1, 2], &[3, 4], &[1.0, 0.0]))
            .unwrap();
        assert_eq!(block.size(), 2);
        assert!(block.get_block().weight().is_empty());
        assert!(block.get_block().qid().is_empty());

        let err = block
            .push(&Row::indices_only(&[1.0], &[1u32]))
            .unwrap_err();
        assert_eq!(
            err,
            BlockError::ValueLayoutMismatch {
                array: "weight",
                stored: false
            }
        );
        assert_eq!(block.size(), 2);
        assert_eq!(block.label.len(), 2);
        assert_eq!(block.nnz(), 2);

        // Further unweighted batches still merge.
        block
            .push_block(&unweighted_batch(&[0, 1], &[5], &[1.0]))
            .unwrap();
        assert_eq!(block.size(), 3);
        assert!(block.get_block().weight().is_empty());
    }

    #[test]
    fn push_block_label_width_mismatch_rejected() {
        let mut wide =
            RowBlockContainer::<u32>::with_config(RowBlockConfig::new().with_label_width(2))
                .unwrap();
        wide.push(&Row::indices_only(&[1.0, 2.0], &[1u32])).unwrap();

        let mut narrow = RowBlockContainer::<u32>::new();
        let err = narrow.push_block(&wide.get_block()).unwrap_err();
        assert_eq!(
            err,
            BlockError::LabelWidthMismatch {
                expected: 1,
                found: 2
            }
        );
        assert!(narrow.is_empty());
    }

    #[test]
    fn push_block_value_layout_mismatch_rejected() {
        let mut with_values = RowBlockContainer::<u32>::new();
        with_values.push(&Row::new(&[1.0], &[1u32], &[1.0])).unwrap();
        let mut without = RowBlockContainer::<u32>::new();
        without.push(&Row::indices_only(&[1.0], &[2u32])).unwrap();

        let err = with_values.push_block(&without.get_block()).unwrap_err();
        assert!(matches!(
            err,
            BlockError::ValueLayoutMismatch {
                array: "value",
                stored: true
            }
        ));
        assert_eq!(with_values.size(), 1);
    }

    #[test]
    fn clear_resets_everything_including_extras() {
        let mut block = two_extras();
        let baseline = block.mem_cost_bytes();
        block
            .push(
                &Row::new(&[1.0], &[1u32], &[1.0])
                    .with_extra(UnitRow::new(&[5u32], &[0.5]))
                    .with_extra(UnitRow::indices_only(&[2u32])),
            )
            .unwrap();
        assert!(block.mem_cost_bytes() > baseline);

        block.clear();
        assert_eq!(block.size(), 0);
        assert_eq!(block.max_index(), 0);
        assert_eq!(block.extra(0).unwrap().size(), 0);
        assert_eq!(block.mem_cost_bytes(), baseline);
        assert_eq!(baseline, 3 * size_of::<usize>());
    }

    #[test]
    fn config_round_trips() {
        let config = RowBlockConfig::new().with_label_width(3).with_extra("x");
        let block = RowBlockContainer::<u16>::with_config(config.clone()).unwrap();
        assert_eq!(block.config(), config);
        assert_eq!(block.label_width(), 3);
        assert_eq!(block.extra_count(), 1);
    }
}
