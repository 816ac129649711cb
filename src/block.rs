// SPDX-License-Identifier: MIT
//! Tape block construction and encoding
//!
//! A [`Block`] is one named unit of data on the tape. Encoding it
//! produces the pair of standard speed blocks a loader expects: a
//! 19-byte header block describing the name, kind and load address,
//! followed by the data block carrying the payload itself.

use crate::format::{
    pad_name, xor_checksum, BlockKind, BLOCK_ID_STANDARD_SPEED, DATA_FLAG, HEADER_BODY_SIZE,
    HEADER_FLAG, MAX_PAYLOAD_SIZE, NO_AUTOSTART, PAUSE_AFTER_BLOCK_MS,
};

/// Errors that can occur during block encoding
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("payload is empty; a block must carry at least one byte")]
    EmptyPayload,

    #[error("payload of {len} bytes exceeds the {MAX_PAYLOAD_SIZE}-byte block capacity")]
    PayloadTooLarge { len: usize },
}

/// A named unit of data to be written to tape
///
/// Immutable once constructed; validation happens in [`Block::new`]
/// so an existing `Block` always encodes successfully.
#[derive(Debug, Clone)]
pub struct Block {
    name: String,
    kind: BlockKind,
    start_address: u16,
    payload: Vec<u8>,
}

impl Block {
    /// Create a block, validating the payload up front
    pub fn new(
        name: impl Into<String>,
        kind: BlockKind,
        start_address: u16,
        payload: Vec<u8>,
    ) -> Result<Self, EncodeError> {
        if payload.is_empty() {
            return Err(EncodeError::EmptyPayload);
        }
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(EncodeError::PayloadTooLarge {
                len: payload.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            kind,
            start_address,
            payload,
        })
    }

    /// Block name as given (padding happens at encode time)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header kind of this block
    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Memory address the payload loads to
    pub fn start_address(&self) -> u16 {
        self.start_address
    }

    /// Payload bytes
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Encode into the header/data tape-block pair
    ///
    /// Purely functional: checksums are computed fresh from the current
    /// payload on every call.
    pub fn encode(&self) -> EncodedBlock {
        // Header body: flag, type tag, padded name, payload length,
        // start address, no-autostart parameter. All u16s little-endian.
        let mut header_body = Vec::with_capacity(HEADER_BODY_SIZE);
        header_body.push(HEADER_FLAG);
        header_body.push(self.kind.type_tag());
        header_body.extend_from_slice(&pad_name(&self.name));
        header_body.extend_from_slice(&(self.payload.len() as u16).to_le_bytes());
        header_body.extend_from_slice(&self.start_address.to_le_bytes());
        header_body.extend_from_slice(&NO_AUTOSTART.to_le_bytes());
        debug_assert_eq!(header_body.len(), HEADER_BODY_SIZE);

        // Data body: flag then payload; the checksum is appended by the
        // framing below.
        let mut data_body = Vec::with_capacity(1 + self.payload.len());
        data_body.push(DATA_FLAG);
        data_body.extend_from_slice(&self.payload);

        let header_len = standard_speed_block_size(header_body.len());
        let data_len = standard_speed_block_size(data_body.len());

        let mut bytes = Vec::with_capacity(header_len + data_len);
        write_standard_speed_block(&mut bytes, &header_body);
        let data_offset = bytes.len();
        write_standard_speed_block(&mut bytes, &data_body);

        EncodedBlock { bytes, data_offset }
    }
}

/// Full on-tape size of one standard speed block for a given body
#[inline]
fn standard_speed_block_size(body_len: usize) -> usize {
    // ID + pause + length field + body + checksum
    1 + 2 + 2 + body_len + 1
}

/// Frame one body as a standard speed data block (ID 0x10)
///
/// Layout: `[0x10][pause:u16 LE][len:u16 LE][body][checksum]` where the
/// length field counts body plus checksum.
fn write_standard_speed_block(buffer: &mut Vec<u8>, body: &[u8]) {
    buffer.push(BLOCK_ID_STANDARD_SPEED);
    buffer.extend_from_slice(&PAUSE_AFTER_BLOCK_MS.to_le_bytes());
    buffer.extend_from_slice(&((body.len() + 1) as u16).to_le_bytes());
    buffer.extend_from_slice(body);
    buffer.push(xor_checksum(body));
}

/// The byte-exact encoding of one [`Block`]: header block then data block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBlock {
    bytes: Vec<u8>,
    data_offset: usize,
}

impl EncodedBlock {
    /// All encoded bytes, in tape order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Total encoded size
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// An encoded block always carries at least the header pair framing
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The header tape block's bytes
    pub fn header_block_bytes(&self) -> &[u8] {
        &self.bytes[..self.data_offset]
    }

    /// The data tape block's bytes
    pub fn data_block_bytes(&self) -> &[u8] {
        &self.bytes[self.data_offset..]
    }
}
