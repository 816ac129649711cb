// SPDX-License-Identifier: MIT
//! Reference TZX decoder
//!
//! Decoding is not a product feature; this reader exists so the
//! encoder can be verified against the format rather than against
//! itself. It parses the file header, walks the standard speed
//! blocks, and re-checks every per-block checksum.

use crate::format::{
    xor_checksum, BlockKind, BLOCK_ID_STANDARD_SPEED, BLOCK_NAME_WIDTH, DATA_FLAG,
    HEADER_BODY_SIZE, HEADER_FLAG, TZX_FILE_HEADER_SIZE, TZX_MAJOR_VERSION, TZX_SIGNATURE,
};

/// Errors that can occur during decoding
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("image of {len} bytes is shorter than the {TZX_FILE_HEADER_SIZE}-byte file header")]
    TooSmall { len: usize },

    #[error("invalid signature bytes")]
    InvalidSignature,

    #[error("unsupported major version {0}")]
    UnsupportedVersion(u8),

    #[error("unknown block ID {id:#04x} at offset {offset}")]
    UnknownBlockId { id: u8, offset: usize },

    #[error("block {index} truncated: need {needed} more bytes")]
    Truncated { index: usize, needed: usize },

    #[error("block {index} checksum mismatch: stored {stored:#04x}, computed {computed:#04x}")]
    ChecksumMismatch {
        index: usize,
        stored: u8,
        computed: u8,
    },

    #[error("block {index} has an empty body")]
    EmptyBody { index: usize },

    #[error("malformed header block body at block {index}")]
    MalformedHeader { index: usize },
}

/// One decoded standard speed block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBlock {
    /// Pause after this block, milliseconds
    pub pause_ms: u16,

    /// Flag byte (0x00 header, 0xFF data)
    pub flag: u8,

    /// Body bytes after the flag, checksum excluded
    pub data: Vec<u8>,
}

impl DecodedBlock {
    /// Whether this is a header block
    pub fn is_header(&self) -> bool {
        self.flag == HEADER_FLAG
    }

    /// Whether this is a data block
    pub fn is_data(&self) -> bool {
        self.flag == DATA_FLAG
    }
}

/// Fields of a decoded header block body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub kind: Option<BlockKind>,
    pub name: String,
    pub data_length: u16,
    pub start_address: u16,
    pub param2: u16,
}

/// Reader over a complete TZX image
pub struct TzxReader {
    blocks: Vec<DecodedBlock>,
}

impl TzxReader {
    /// Parse a complete image, validating framing and checksums
    pub fn from_slice(image: &[u8]) -> Result<Self, ReadError> {
        if image.len() < TZX_FILE_HEADER_SIZE {
            return Err(ReadError::TooSmall { len: image.len() });
        }
        if &image[..8] != TZX_SIGNATURE {
            return Err(ReadError::InvalidSignature);
        }
        if image[8] != TZX_MAJOR_VERSION {
            return Err(ReadError::UnsupportedVersion(image[8]));
        }

        let mut blocks = Vec::new();
        let mut offset = TZX_FILE_HEADER_SIZE;

        while offset < image.len() {
            let index = blocks.len();
            let id = image[offset];
            if id != BLOCK_ID_STANDARD_SPEED {
                return Err(ReadError::UnknownBlockId { id, offset });
            }

            // ID + pause + length field
            let framing_end = offset + 5;
            if framing_end > image.len() {
                return Err(ReadError::Truncated {
                    index,
                    needed: framing_end - image.len(),
                });
            }

            let pause_ms = u16::from_le_bytes([image[offset + 1], image[offset + 2]]);
            let length = u16::from_le_bytes([image[offset + 3], image[offset + 4]]) as usize;
            if length == 0 {
                return Err(ReadError::EmptyBody { index });
            }

            let block_end = framing_end + length;
            if block_end > image.len() {
                return Err(ReadError::Truncated {
                    index,
                    needed: block_end - image.len(),
                });
            }

            // Length counts body + checksum
            let body = &image[framing_end..block_end - 1];
            let stored = image[block_end - 1];
            let computed = xor_checksum(body);
            if stored != computed {
                return Err(ReadError::ChecksumMismatch {
                    index,
                    stored,
                    computed,
                });
            }
            if body.is_empty() {
                return Err(ReadError::EmptyBody { index });
            }

            blocks.push(DecodedBlock {
                pause_ms,
                flag: body[0],
                data: body[1..].to_vec(),
            });
            offset = block_end;
        }

        Ok(Self { blocks })
    }

    /// All decoded blocks, in tape order
    pub fn blocks(&self) -> &[DecodedBlock] {
        &self.blocks
    }

    /// Decode the body of a header block into its named fields
    pub fn header_fields(&self, index: usize) -> Result<BlockHeader, ReadError> {
        let block = self
            .blocks
            .get(index)
            .filter(|b| b.is_header())
            .ok_or(ReadError::MalformedHeader { index })?;

        // Body after the flag: tag + name + three u16 params
        if block.data.len() != HEADER_BODY_SIZE - 1 {
            return Err(ReadError::MalformedHeader { index });
        }

        let name_end = 1 + BLOCK_NAME_WIDTH;
        let name = String::from_utf8_lossy(&block.data[1..name_end])
            .trim_end()
            .to_string();

        Ok(BlockHeader {
            kind: BlockKind::from_type_tag(block.data[0]),
            name,
            data_length: u16::from_le_bytes([block.data[name_end], block.data[name_end + 1]]),
            start_address: u16::from_le_bytes([
                block.data[name_end + 2],
                block.data[name_end + 3],
            ]),
            param2: u16::from_le_bytes([block.data[name_end + 4], block.data[name_end + 5]]),
        })
    }

    /// Extract the payload of the first header/data block pair
    ///
    /// This is the loader's view: the block name from the header and
    /// the data block's body with the flag stripped.
    pub fn first_code_block(&self) -> Result<(BlockHeader, Vec<u8>), ReadError> {
        let header = self.header_fields(0)?;
        let data = self
            .blocks
            .get(1)
            .filter(|b| b.is_data())
            .ok_or(ReadError::MalformedHeader { index: 1 })?;
        Ok((header, data.data.clone()))
    }
}
