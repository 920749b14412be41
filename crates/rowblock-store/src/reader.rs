//! Sequential block reader.
//!
//! [`BlockReader`] loads blocks written by [`BlockWriter`](crate::BlockWriter)
//! until the stream ends cleanly between blocks.

use std::io::Read;
use std::marker::PhantomData;

use rowblock_core::{Element, Index};

use crate::config::RowBlockConfig;
use crate::error::CodecError;
use crate::row_block::RowBlockContainer;

/// Reads consecutive row blocks from a byte stream.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
pub struct BlockReader<R: Read> {
    reader: R,
    blocks_read: u64,
}

impl<R: Read> BlockReader<R> {
    /// Wrap a source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            blocks_read: 0,
        }
    }

    /// Load the next block into `block`, reusing its allocations.
    ///
    /// Returns `Ok(false)` once the stream is exhausted.
    pub fn next_block<I: Index, V: Element>(
        &mut self,
        block: &mut RowBlockContainer<I, V>,
    ) -> Result<bool, CodecError> {
        let loaded = block.load(&mut self.reader)?;
        if loaded {
            self.blocks_read += 1;
        }
        Ok(loaded)
    }

    /// Number of blocks read so far.
    pub fn blocks_read(&self) -> u64 {
        self.blocks_read
    }

    /// Convert into an iterator of owned blocks, each loaded into a fresh
    /// container built from `config`.
    pub fn blocks<I: Index, V: Element>(
        self,
        config: RowBlockConfig,
    ) -> Result<BlockIter<R, I, V>, CodecError> {
        config.validate()?;
        Ok(BlockIter {
            reader: self.reader,
            config,
            blocks_read: self.blocks_read,
            done: false,
            _marker: PhantomData,
        })
    }
}

/// Iterator adapter over stored row blocks.
pub struct BlockIter<R: Read, I, V> {
    reader: R,
    config: RowBlockConfig,
    blocks_read: u64,
    done: bool,
    _marker: PhantomData<fn() -> (I, V)>,
}

impl<R: Read, I, V> BlockIter<R, I, V> {
    /// Number of blocks read so far, including any read before conversion.
    pub fn blocks_read(&self) -> u64 {
        self.blocks_read
    }
}

impl<R: Read, I: Index, V: Element> Iterator for BlockIter<R, I, V> {
    type Item = Result<RowBlockContainer<I, V>, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut block = match RowBlockContainer::with_config(self.config.clone()) {
            Ok(block) => block,
            Err(e) => {
                self.done = true;
                return Some(Err(e.into()));
            }
        };
        match block.load(&mut self.reader) {
            Ok(true) => {
                self.blocks_read += 1;
                Some(Ok(block))
            }
            Ok(false) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
