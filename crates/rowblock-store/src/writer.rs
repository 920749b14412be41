//! Sequential block writer.
//!
//! [`BlockWriter`] appends saved blocks to any `Write` sink, one after
//! another with no header or separator.

use std::io::Write;

use rowblock_core::{Element, Index};

use crate::error::CodecError;
use crate::row_block::RowBlockContainer;

/// Writes consecutive row blocks to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use rowblock_core::Row;
/// use rowblock_store::{BlockReader, BlockWriter, RowBlockContainer};
///
/// let mut block = RowBlockContainer::<u32>::new();
/// let mut writer = BlockWriter::new(Vec::new());
/// for i in 0..3u32 {
///     block.clear();
///     block.push(&Row::new(&[1.0], &[i], &[0.5])).unwrap();
///     writer.write_block(&block).unwrap();
/// }
/// assert_eq!(writer.blocks_written(), 3);
/// let buf = writer.into_inner();
///
/// let mut reader = BlockReader::new(buf.as_slice());
/// let mut scratch = RowBlockContainer::<u32>::new();
/// while reader.next_block(&mut scratch).unwrap() {
///     assert_eq!(scratch.size(), 1);
/// }
/// assert_eq!(reader.blocks_read(), 3);
/// ```
pub struct BlockWriter<W: Write> {
    writer: W,
    blocks_written: u64,
}

impl<W: Write> BlockWriter<W> {
    /// Wrap a sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            blocks_written: 0,
        }
    }

    /// Save `block` to the sink.
    pub fn write_block<I: Index, V: Element>(
        &mut self,
        block: &RowBlockContainer<I, V>,
    ) -> Result<(), CodecError> {
        block.save(&mut self.writer)?;
        self.blocks_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of blocks written so far.
    pub fn blocks_written(&self) -> u64 {
        self.blocks_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
