// SPDX-License-Identifier: MIT
//! # tzxpack
//!
//! A TZX tape-image encoder: wraps a text or binary payload into one
//! named CODE block inside a valid TZX container that a real or
//! emulated tape loader can read back.
//!
//! ## Format Overview
//!
//! TZX is a block-structured tape-image format. Every block carries
//! its own length and XOR checksum; the file level adds nothing but a
//! fixed signature and a version pair.
//!
//! ```text
//! TZX container (this crate's subset)
//! ===================================
//!
//! File header (10 bytes):
//! - Signature: "ZXTape!" 0x1A          (8 bytes)
//! - Major version: 1                   (1 byte)
//! - Minor version: 20                  (1 byte)
//!
//! Standard speed data block (ID 0x10), repeated per tape block:
//! - Block ID: 0x10                     (1 byte)
//! - Pause after block, ms              (2 bytes, LE)
//! - Length of body + checksum         (2 bytes, LE)
//! - Body                              (length - 1 bytes)
//! - Checksum: XOR of all body bytes   (1 byte)
//!
//! A named code block is a pair of these:
//! - Header block body: flag 0x00, type tag 3, name (10 bytes,
//!   space-padded), payload length (LE), start address (LE),
//!   0x8000 "no autostart" (LE)
//! - Data block body: flag 0xFF, payload bytes
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tzxpack::{Block, BlockKind, Payload, TzxReader, TzxWriter};
//!
//! // "A" plus the always-appended 0x00 terminator
//! let payload = Payload::from_text("A").unwrap();
//! let block = Block::new("PROG", BlockKind::Code, 0, payload.into_bytes()).unwrap();
//!
//! let mut writer = TzxWriter::new();
//! writer.add_block(block.encode());
//! let image = writer.finalize().unwrap();
//!
//! // Verify with the reference decoder
//! let reader = TzxReader::from_slice(&image).unwrap();
//! let (header, payload) = reader.first_code_block().unwrap();
//! assert_eq!(header.name, "PROG");
//! assert_eq!(payload, vec![0x41, 0x00]);
//! ```
//!
//! The pipeline is strictly linear and single-pass: payload →
//! block encoder → container writer → output sink. Nothing is
//! mutated after construction and checksums are always computed
//! fresh at encode time.

pub mod block;
pub mod convert;
pub mod format;
pub mod payload;
pub mod reader;
pub mod writer;

// Re-export main types
pub use block::{Block, EncodeError, EncodedBlock};
pub use convert::{convert_file, encode_image, ConvertError, InputMode};
pub use format::BlockKind;
pub use format::{
    BLOCK_NAME_WIDTH, MAX_PAYLOAD_SIZE, TZX_FILE_HEADER_SIZE, TZX_MAJOR_VERSION,
    TZX_MINOR_VERSION, TZX_SIGNATURE,
};
pub use payload::{Payload, PayloadError, PAYLOAD_TERMINATOR};
pub use reader::{BlockHeader, DecodedBlock, ReadError, TzxReader};
pub use writer::{TzxWriter, WriteError};
