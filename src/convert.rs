// SPDX-License-Identifier: MIT
//! End-to-end conversion pipeline
//!
//! One pipeline serves both input modes: read the source file, build
//! the payload, encode a single named code block, and write the tape
//! image atomically. Text and binary conversion differ only in the
//! payload-construction step.

use crate::block::{Block, EncodeError};
use crate::format::BlockKind;
use crate::payload::{Payload, PayloadError};
use crate::writer::{TzxWriter, WriteError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// How the input file's bytes become a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Map characters through the symbol table
    Text,

    /// Take the bytes as-is
    Binary,
}

/// Errors that can occur across the whole pipeline
///
/// Each variant maps to a distinct process exit code so callers can
/// script against failures.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot read input file {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Container(#[from] WriteError),

    #[error("failed to write output file {}: {source}", path.display())]
    OutputWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Exit code for this failure kind; zero is reserved for success
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::InputNotFound { .. } => 2,
            ConvertError::Payload(_) => 3,
            ConvertError::Encode(EncodeError::EmptyPayload) => 4,
            ConvertError::Encode(EncodeError::PayloadTooLarge { .. }) => 5,
            ConvertError::Container(_) => 6,
            ConvertError::OutputWriteFailed { .. } => 7,
        }
    }
}

/// Run the full pipeline from input path to output path
pub fn convert_file(
    mode: InputMode,
    input: &Path,
    block_name: &str,
    output: &Path,
) -> Result<(), ConvertError> {
    let payload = build_payload(mode, input)?;
    info!(
        input = %input.display(),
        payload_bytes = payload.len(),
        "payload built"
    );

    let image = encode_image(block_name, payload)?;
    write_atomic(output, &image)?;
    info!(
        output = %output.display(),
        image_bytes = image.len(),
        "tape image written"
    );

    Ok(())
}

/// Read the input file and build the terminated payload
fn build_payload(mode: InputMode, input: &Path) -> Result<Payload, ConvertError> {
    let input_err = |source| ConvertError::InputNotFound {
        path: input.to_path_buf(),
        source,
    };

    match mode {
        InputMode::Text => {
            let text = fs::read_to_string(input).map_err(input_err)?;
            Ok(Payload::from_text(&text)?)
        }
        InputMode::Binary => {
            let data = fs::read(input).map_err(input_err)?;
            Ok(Payload::from_binary(&data))
        }
    }
}

/// Encode one named code block into a complete tape image
pub fn encode_image(block_name: &str, payload: Payload) -> Result<Vec<u8>, ConvertError> {
    // Start address 0: the payload is informational, not relocated.
    let block = Block::new(block_name, BlockKind::Code, 0, payload.into_bytes())?;

    let mut writer = TzxWriter::new();
    writer.add_block(block.encode());
    Ok(writer.finalize()?)
}

/// Write bytes through a temporary file and move them into place
///
/// A failed run never leaves a partial output file behind.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ConvertError> {
    let output_err = |source| ConvertError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(output_err)?;
    tmp.write_all(bytes).map_err(output_err)?;
    tmp.persist(path).map_err(|e| output_err(e.error))?;
    Ok(())
}
