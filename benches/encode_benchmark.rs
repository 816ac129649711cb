// SPDX-License-Identifier: MIT
//! Benchmark for TZX block encoding and container serialization

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tzxpack::{Block, BlockKind, Payload, TzxReader, TzxWriter};

fn create_test_payload() -> Vec<u8> {
    // A full-size code block: 32KB of pseudo-machine-code
    let mut data = Vec::with_capacity(32 * 1024);
    let mut state = 0x55u8;
    for _ in 0..32 * 1024 - 1 {
        state = state.rotate_left(3) ^ 0xA5;
        data.push(state);
    }
    Payload::from_binary(&data).into_bytes()
}

fn benchmark_encode_block(c: &mut Criterion) {
    let payload = create_test_payload();

    c.bench_function("encode_block_32k", |b| {
        b.iter(|| {
            let block =
                Block::new("BENCH", BlockKind::Code, 0, black_box(payload.clone())).unwrap();
            black_box(block.encode())
        })
    });
}

fn benchmark_finalize_image(c: &mut Criterion) {
    let payload = create_test_payload();
    let encoded = Block::new("BENCH", BlockKind::Code, 0, payload)
        .unwrap()
        .encode();

    c.bench_function("finalize_image_32k", |b| {
        b.iter(|| {
            let mut writer = TzxWriter::new();
            writer.add_block(black_box(encoded.clone()));
            black_box(writer.finalize().unwrap())
        })
    });
}

fn benchmark_decode_image(c: &mut Criterion) {
    let payload = create_test_payload();
    let block = Block::new("BENCH", BlockKind::Code, 0, payload).unwrap();
    let mut writer = TzxWriter::new();
    writer.add_block(block.encode());
    let image = writer.finalize().unwrap();

    c.bench_function("decode_image_32k", |b| {
        b.iter(|| black_box(TzxReader::from_slice(black_box(&image)).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_encode_block,
    benchmark_finalize_image,
    benchmark_decode_image
);
criterion_main!(benches);
