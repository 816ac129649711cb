// SPDX-License-Identifier: MIT
//! TZX format specification constants and field-level helpers
//!
//! Everything here mirrors the published TZX layout: the 10-byte file
//! header and the "standard speed data block" (ID 0x10) framing that
//! real tape loaders expect byte-for-byte.

/// TZX file signature: `"ZXTape!"` followed by 0x1A
pub const TZX_SIGNATURE: &[u8; 8] = b"ZXTape!\x1a";

/// TZX format major version
pub const TZX_MAJOR_VERSION: u8 = 1;

/// TZX format minor version
pub const TZX_MINOR_VERSION: u8 = 20;

/// File header size in bytes (signature + major + minor)
pub const TZX_FILE_HEADER_SIZE: usize = 10;

/// Block ID for a standard speed data block
pub const BLOCK_ID_STANDARD_SPEED: u8 = 0x10;

/// Pause after each block, in milliseconds (written as a u16 LE field)
pub const PAUSE_AFTER_BLOCK_MS: u16 = 1000;

/// Fixed width of a tape-block name, space-padded
pub const BLOCK_NAME_WIDTH: usize = 10;

/// Flag byte marking a header block
pub const HEADER_FLAG: u8 = 0x00;

/// Flag byte marking a data block
pub const DATA_FLAG: u8 = 0xFF;

/// Size of a header block body (flag + type tag + name + three u16 params)
pub const HEADER_BODY_SIZE: usize = 2 + BLOCK_NAME_WIDTH + 6;

/// The header's second parameter when no autostart is requested
pub const NO_AUTOSTART: u16 = 0x8000;

/// Largest payload a data block can carry
///
/// The u16 length field counts flag + payload + checksum, so two bytes
/// of the 65535 capacity go to framing.
pub const MAX_PAYLOAD_SIZE: usize = u16::MAX as usize - 2;

/// Header kinds defined by the tape format
///
/// The type tag is the second byte of a header block body. This crate
/// only ever emits [`BlockKind::Code`], but the tag is a format-level
/// enumeration, not a free constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// BASIC program
    Program,

    /// Number array
    NumberArray,

    /// Character array
    CharacterArray,

    /// Machine code / raw bytes ("Bytes" on the loading screen)
    Code,
}

impl BlockKind {
    /// Type tag byte written into the header block body
    #[inline]
    pub fn type_tag(self) -> u8 {
        match self {
            BlockKind::Program => 0,
            BlockKind::NumberArray => 1,
            BlockKind::CharacterArray => 2,
            BlockKind::Code => 3,
        }
    }

    /// Parse a type tag byte back into a kind
    pub fn from_type_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(BlockKind::Program),
            1 => Some(BlockKind::NumberArray),
            2 => Some(BlockKind::CharacterArray),
            3 => Some(BlockKind::Code),
            _ => None,
        }
    }

    /// Get the name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Program => "program",
            BlockKind::NumberArray => "number array",
            BlockKind::CharacterArray => "character array",
            BlockKind::Code => "code",
        }
    }
}

/// XOR parity over a block body
///
/// The body's first byte is the flag, so this is the format's
/// "flag XOR every data byte" checksum in one pass.
#[inline]
pub fn xor_checksum(body: &[u8]) -> u8 {
    body.iter().fold(0, |acc, b| acc ^ b)
}

/// Pad or truncate a block name to the fixed 10-byte field
///
/// Overlong names are silently truncated and short names space-padded,
/// matching what tape tooling has always done with the name field.
pub fn pad_name(name: &str) -> [u8; BLOCK_NAME_WIDTH] {
    let mut field = [b' '; BLOCK_NAME_WIDTH];
    for (slot, byte) in field.iter_mut().zip(name.bytes()) {
        *slot = byte;
    }
    field
}
