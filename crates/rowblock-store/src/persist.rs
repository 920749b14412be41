//! Save and load for [`RowBlockContainer`].
//!
//! Block layout, in order: offset, label, weight, qid, field, index and
//! value as length-prefixed arrays, then max_field and max_index as bare
//! `I`-width scalars. The label width and the extras are not part of the
//! format; a loading container keeps its own label width and drops any
//! extra contents.

use std::io::{Read, Write};

use rowblock_core::{BlockError, Element, Index};
use tracing::debug;

use crate::codec::{
    narrow_offsets, read_array, read_array_or_eof, read_scalar, write_array, write_offsets,
    write_scalar,
};
use crate::error::CodecError;
use crate::row_block::RowBlockContainer;
use crate::view::{RowBlock, RowBlockParts};

impl<I: Index, V: Element> RowBlockContainer<I, V> {
    /// Write this block's arrays to `w`.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`get_block`](Self::get_block).
    pub fn save(&self, w: &mut dyn Write) -> Result<(), CodecError> {
        self.check_consistency();
        write_offsets(w, &self.offset)?;
        write_array(w, &self.label)?;
        write_array(w, &self.weight)?;
        write_array(w, &self.qid)?;
        write_array(w, &self.field)?;
        write_array(w, &self.index)?;
        write_array(w, &self.value)?;
        write_scalar(w, self.max_field)?;
        write_scalar(w, self.max_index)?;
        debug!(rows = self.size(), entries = self.nnz(), "saved row block");
        Ok(())
    }

    /// Replace this block's contents with the next block in `r`.
    ///
    /// Returns `Ok(false)` if `r` is already at its end. The decoded
    /// arrays are validated against this container's label width before
    /// anything is replaced, so on `Ok(false)` or any error the container
    /// is unchanged. On success every extra is cleared.
    pub fn load(&mut self, r: &mut dyn Read) -> Result<bool, CodecError> {
        let Some(offset) = read_array_or_eof::<u64>(r, "offset")? else {
            return Ok(false);
        };
        let offset = narrow_offsets(offset)?;
        let label: Vec<V> = read_array(r, "label")?;
        let weight = read_array(r, "weight")?;
        let qid = read_array(r, "qid")?;
        let field: Vec<I> = read_array(r, "field")?;
        let index: Vec<I> = read_array(r, "index")?;
        let value: Vec<V> = read_array(r, "value")?;
        let max_field: I = read_scalar(r, "max_field")?;
        let max_index: I = read_scalar(r, "max_index")?;

        if offset.first() != Some(&0) || offset.last() != Some(&index.len()) {
            return Err(BlockError::InvalidOffsets {
                detail: format!(
                    "stored offsets must span 0..{}, got {:?}..{:?}",
                    index.len(),
                    offset.first(),
                    offset.last()
                ),
            }
            .into());
        }
        RowBlock::from_parts(RowBlockParts {
            label_width: self.label_width,
            offset: &offset,
            label: &label,
            weight: &weight,
            qid: &qid,
            field: &field,
            index: &index,
            value: &value,
            extra: Default::default(),
        })?;

        self.offset = offset;
        self.label = label;
        self.weight = weight;
        self.qid = qid;
        self.field = field;
        self.index = index;
        self.value = value;
        self.max_field = max_field;
        self.max_index = max_index;
        for extra in self.extra.values_mut() {
            extra.clear();
        }
        debug!(rows = self.size(), entries = self.nnz(), "loaded row block");
        Ok(true)
    }
}
