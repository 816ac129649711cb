// SPDX-License-Identifier: MIT
//! Integration tests for the file-to-file conversion pipeline

use std::fs;

use tzxpack::{
    convert_file, BlockKind, ConvertError, InputMode, TzxReader, TZX_SIGNATURE,
};

#[test]
fn test_text_file_to_tzx() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("program.txt");
    let output = dir.path().join("program.tzx");
    fs::write(&input, "10 PRINT HELLO\n20 GOTO 10\n").unwrap();

    convert_file(InputMode::Text, &input, "PROG", &output).unwrap();

    let image = fs::read(&output).unwrap();
    assert_eq!(&image[..8], TZX_SIGNATURE);

    let reader = TzxReader::from_slice(&image).unwrap();
    let (header, payload) = reader.first_code_block().unwrap();
    assert_eq!(header.name, "PROG");
    assert_eq!(header.kind, Some(BlockKind::Code));
    assert_eq!(header.start_address, 0);

    // Newlines become carriage returns; the terminator closes the payload.
    let expected: Vec<u8> = "10 PRINT HELLO\r20 GOTO 10\r\0"
        .bytes()
        .collect();
    assert_eq!(payload, expected);
}

#[test]
fn test_binary_file_to_tzx() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("blob.bin");
    let output = dir.path().join("blob.tzx");
    let data: Vec<u8> = (0..=255).collect();
    fs::write(&input, &data).unwrap();

    convert_file(InputMode::Binary, &input, "BLOB", &output).unwrap();

    let image = fs::read(&output).unwrap();
    let reader = TzxReader::from_slice(&image).unwrap();
    let (header, payload) = reader.first_code_block().unwrap();

    assert_eq!(header.name, "BLOB");
    assert_eq!(payload.len(), 257);
    assert_eq!(&payload[..256], &data[..]);
    assert_eq!(payload[256], 0x00);
}

#[test]
fn test_empty_input_file_still_produces_block() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    let output = dir.path().join("empty.tzx");
    fs::write(&input, "").unwrap();

    convert_file(InputMode::Text, &input, "EMPTY", &output).unwrap();

    let image = fs::read(&output).unwrap();
    let reader = TzxReader::from_slice(&image).unwrap();
    let (header, payload) = reader.first_code_block().unwrap();
    assert_eq!(header.data_length, 1);
    assert_eq!(payload, vec![0x00]);
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.txt");
    let output = dir.path().join("out.tzx");

    let err = convert_file(InputMode::Text, &input, "PROG", &output).unwrap_err();
    assert!(matches!(err, ConvertError::InputNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_unmappable_symbol_leaves_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let output = dir.path().join("bad.tzx");
    fs::write(&input, "PRINT \"HELLO\"").unwrap();

    let err = convert_file(InputMode::Text, &input, "PROG", &output).unwrap_err();
    assert!(matches!(err, ConvertError::Payload(_)));
    assert_eq!(err.exit_code(), 3);

    // Rejection happens before any output I/O
    assert!(!output.exists());
}

#[test]
fn test_output_replaced_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.tzx");
    fs::write(&input, "FIRST").unwrap();
    convert_file(InputMode::Text, &input, "PROG", &output).unwrap();

    // Re-run with different content; the output is replaced, and no
    // temporary files remain next to it.
    fs::write(&input, "SECOND").unwrap();
    convert_file(InputMode::Text, &input, "PROG", &output).unwrap();

    let reader = TzxReader::from_slice(&fs::read(&output).unwrap()).unwrap();
    let (_, payload) = reader.first_code_block().unwrap();
    assert_eq!(payload, b"SECOND\0".to_vec());

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 2);
}

#[test]
fn test_long_name_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.tzx");
    fs::write(&input, "X").unwrap();

    convert_file(InputMode::Text, &input, "AVERYLONGNAME", &output).unwrap();

    let reader = TzxReader::from_slice(&fs::read(&output).unwrap()).unwrap();
    let (header, _) = reader.first_code_block().unwrap();
    assert_eq!(header.name, "AVERYLONGN");
}
