//! Benchmark: moving a fixed payload through the pipe under different
//! window sizes and producer chunk sizes, on both the copying and the
//! `Bytes`-handle paths.
#![allow(missing_docs)]

use std::time::Duration;

use bytepipe::{BytePipe, Bytes, PipeReader, PipeWriter};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const PAYLOAD_LEN: usize = 64 * 1024;

fn make_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

/// Pushes `payload` in `chunk`-sized slices, draining the front chunk after
/// every push. Returns the bytes that came out so criterion can black-box
/// the work.
fn run_copying(payload: &[u8], window: usize, chunk: usize) -> u64 {
    let mut pipe = BytePipe::new(window);
    let mut out = 0_u64;
    for piece in payload.chunks(chunk) {
        let mut pending = piece;
        while !pending.is_empty() {
            let accepted = pipe.push(pending);
            pending = &pending[accepted..];
            let front = pipe.peek().len();
            pipe.pop(front);
            out += front as u64;
        }
    }
    while !pipe.peek().is_empty() {
        let front = pipe.peek().len();
        pipe.pop(front);
        out += front as u64;
    }
    debug_assert_eq!(out, payload.len() as u64);
    out
}

/// Same transfer, but the producer hands over `Bytes` slices and the
/// consumer takes `Bytes` back out, so chunks move by handle.
fn run_zero_copy(payload: &Bytes, window: usize, chunk: usize) -> u64 {
    let mut pipe = BytePipe::new(window);
    let mut out = 0_u64;
    let mut offset = 0;
    while offset < payload.len() {
        let end = (offset + chunk).min(payload.len());
        let mut piece = payload.slice(offset..end);
        while !piece.is_empty() {
            let accepted = pipe.push_chunk(piece.clone());
            piece = piece.slice(accepted..);
            out += pipe.pop_bytes(window).len() as u64;
        }
        offset = end;
    }
    out += pipe.pop_bytes(window).len() as u64;
    debug_assert_eq!(out, payload.len() as u64);
    out
}

fn bench_transfer(c: &mut Criterion) {
    let payload = make_payload(PAYLOAD_LEN);
    let shared = Bytes::from(payload.clone());

    let mut group = c.benchmark_group("pipe_transfer");
    group.throughput(Throughput::Bytes(PAYLOAD_LEN as u64));

    for &window in &[512_usize, 4_096, 65_536] {
        for &chunk in &[64_usize, 1_024, 16_384] {
            group.bench_with_input(
                BenchmarkId::new(format!("copying/window_{window}"), chunk),
                &chunk,
                |b, &chunk| {
                    b.iter(|| black_box(run_copying(black_box(&payload), window, chunk)));
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("zero_copy/window_{window}"), chunk),
                &chunk,
                |b, &chunk| {
                    b.iter(|| black_box(run_zero_copy(black_box(&shared), window, chunk)));
                },
            );
        }
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_transfer }
criterion_main!(benches);
