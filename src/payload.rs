// SPDX-License-Identifier: MIT
//! Payload construction for text and binary sources
//!
//! Both modes end the payload with a single 0x00 terminator, so a
//! payload is never empty even for an empty input file. Text mode maps
//! characters through a fixed symbol table and rejects anything
//! outside it; silently dropping characters would corrupt the
//! loadable program.

/// Terminator appended to every payload
pub const PAYLOAD_TERMINATOR: u8 = 0x00;

/// Code emitted for a newline: the machine's carriage return
pub const NEWLINE_CODE: u8 = 0x0D;

/// Errors that can occur during payload construction
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("unmappable symbol {ch:?} at byte offset {offset}")]
    UnmappableSymbol { ch: char, offset: usize },
}

// Symbol table indexed by ASCII byte. Letters, digits, space and colon
// map to their ASCII codes; newline maps to carriage return. Built at
// compile time so the alphabet is fixed before any input is read.
const SYMBOL_TABLE: [Option<u8>; 128] = build_symbol_table();

const fn build_symbol_table() -> [Option<u8>; 128] {
    let mut table = [None; 128];

    let mut c = b'A';
    while c <= b'Z' {
        table[c as usize] = Some(c);
        c += 1;
    }

    let mut c = b'a';
    while c <= b'z' {
        table[c as usize] = Some(c);
        c += 1;
    }

    let mut c = b'0';
    while c <= b'9' {
        table[c as usize] = Some(c);
        c += 1;
    }

    table[b' ' as usize] = Some(b' ');
    table[b':' as usize] = Some(b':');
    table[b'\n' as usize] = Some(NEWLINE_CODE);

    table
}

/// An ordered, immutable byte sequence destined for one tape block
///
/// Always at least one byte long and always terminated with 0x00.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    /// Build a payload from raw bytes (identity map plus terminator)
    pub fn from_binary(data: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(data.len() + 1);
        bytes.extend_from_slice(data);
        bytes.push(PAYLOAD_TERMINATOR);
        Self { bytes }
    }

    /// Build a payload from text via the symbol table, plus terminator
    ///
    /// Fails on the first character outside the alphabet, before any
    /// output exists.
    pub fn from_text(text: &str) -> Result<Self, PayloadError> {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        for (offset, ch) in text.char_indices() {
            let mapped = if ch.is_ascii() {
                SYMBOL_TABLE[ch as usize]
            } else {
                None
            };
            let code = mapped.ok_or(PayloadError::UnmappableSymbol { ch, offset })?;
            bytes.push(code);
        }
        bytes.push(PAYLOAD_TERMINATOR);
        Ok(Self { bytes })
    }

    /// Payload bytes, terminator included
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume into the underlying bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Length in bytes; never zero
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: the terminator guarantees at least one byte
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_identity_plus_terminator() {
        let payload = Payload::from_binary(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(payload.as_bytes(), &[0xDE, 0xAD, 0xBE, 0xEF, 0x00]);
    }

    #[test]
    fn test_empty_binary_input_yields_terminator_only() {
        let payload = Payload::from_binary(&[]);
        assert_eq!(payload.as_bytes(), &[0x00]);
        assert!(!payload.is_empty());
    }

    #[test]
    fn test_empty_text_input_yields_terminator_only() {
        let payload = Payload::from_text("").unwrap();
        assert_eq!(payload.as_bytes(), &[0x00]);
    }

    #[test]
    fn test_text_ascii_mapping() {
        let payload = Payload::from_text("Az09 :").unwrap();
        assert_eq!(payload.as_bytes(), &[0x41, 0x7a, 0x30, 0x39, 0x20, 0x3a, 0x00]);
    }

    #[test]
    fn test_newline_maps_to_carriage_return() {
        let payload = Payload::from_text("A\nB").unwrap();
        assert_eq!(payload.as_bytes(), &[0x41, 0x0d, 0x42, 0x00]);
    }

    #[test]
    fn test_unmappable_punctuation() {
        let err = Payload::from_text("AB!").unwrap_err();
        assert!(matches!(
            err,
            PayloadError::UnmappableSymbol { ch: '!', offset: 2 }
        ));
    }

    #[test]
    fn test_unmappable_tab() {
        let err = Payload::from_text("\t").unwrap_err();
        assert!(matches!(
            err,
            PayloadError::UnmappableSymbol { ch: '\t', offset: 0 }
        ));
    }

    #[test]
    fn test_unmappable_non_ascii() {
        let err = Payload::from_text("héllo").unwrap_err();
        assert!(matches!(
            err,
            PayloadError::UnmappableSymbol { ch: 'é', offset: 1 }
        ));
    }

    #[test]
    fn test_terminator_is_last_byte() {
        for text in ["", "A", "hello world", "10 PRINT X"] {
            let payload = Payload::from_text(text).unwrap();
            assert_eq!(*payload.as_bytes().last().unwrap(), PAYLOAD_TERMINATOR);
        }
    }

    #[test]
    fn test_carriage_return_itself_is_unmappable() {
        // Only '\n' is in the alphabet; a literal CR in the input is not.
        assert!(Payload::from_text("\r").is_err());
    }
}
