// SPDX-License-Identifier: MIT
//! TZX container writer for assembling the file-level byte stream

use crate::block::EncodedBlock;
use crate::format::{TZX_FILE_HEADER_SIZE, TZX_MAJOR_VERSION, TZX_MINOR_VERSION, TZX_SIGNATURE};
use std::io::Write;

/// Errors that can occur during container serialization
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("container has no blocks; refusing to write an empty tape image")]
    EmptyContainer,
}

/// Builder for a TZX container: fixed file header plus blocks in order
///
/// The writer holds encoded blocks only; it performs no file I/O
/// itself. Persistence belongs to the caller's sink.
pub struct TzxWriter {
    blocks: Vec<EncodedBlock>,
}

impl TzxWriter {
    /// Create a writer with no blocks
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append one encoded block; blocks serialize in insertion order
    pub fn add_block(&mut self, block: EncodedBlock) {
        self.blocks.push(block);
    }

    /// Number of blocks queued
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Finalize the container and return the complete byte image
    pub fn finalize(self) -> Result<Vec<u8>, WriteError> {
        if self.blocks.is_empty() {
            return Err(WriteError::EmptyContainer);
        }

        let total_size =
            TZX_FILE_HEADER_SIZE + self.blocks.iter().map(EncodedBlock::len).sum::<usize>();

        // Pre-allocate exact size to avoid reallocations
        let mut buffer = Vec::with_capacity(total_size);
        buffer.extend_from_slice(TZX_SIGNATURE);
        buffer.push(TZX_MAJOR_VERSION);
        buffer.push(TZX_MINOR_VERSION);

        for block in &self.blocks {
            buffer.extend_from_slice(block.as_bytes());
        }

        debug_assert_eq!(buffer.len(), total_size);
        Ok(buffer)
    }

    /// Serialize into a caller-supplied sink
    pub fn write_to<W: Write>(self, writer: &mut W) -> Result<(), WriteError> {
        let bytes = self.finalize()?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

impl Default for TzxWriter {
    fn default() -> Self {
        Self::new()
    }
}
