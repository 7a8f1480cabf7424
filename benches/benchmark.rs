//! Benchmarks for silkcode stream transcoding.
//!
//! Measures encode and decode throughput over an in-memory buffer and the
//! cost of the reverse alphabet lookup.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use silkcode::{AlphabetKind, KeyPair, LineWidth, Transcoder, TranscoderConfig};

/// Input sizes in bytes.
const SIZES: [usize; 3] = [1024, 64 * 1024, 1024 * 1024];

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 131 % 256) as u8).collect()
}

fn transcoder(kind: AlphabetKind) -> Transcoder {
    let config = TranscoderConfig::new(KeyPair::from_bytes(173, 29))
        .with_line_width(LineWidth::default())
        .with_alphabet(kind);
    Transcoder::with_config(config)
}

/// Benchmarks `Transcoder::encode()` into a preallocated buffer.
fn bench_encode(c: &mut Criterion) {
    let t = transcoder(AlphabetKind::Cjk);
    let mut group = c.benchmark_group("encode");

    for len in SIZES {
        let data = sample(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            let mut out = Vec::with_capacity(len * 4);
            b.iter(|| {
                out.clear();
                t.encode(black_box(&data[..]), &mut out).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmarks `Transcoder::decode()`; throughput is in decoded bytes.
fn bench_decode(c: &mut Criterion) {
    let t = transcoder(AlphabetKind::Cjk);
    let mut group = c.benchmark_group("decode");

    for len in SIZES {
        let encoded = t.encode_to_string(&sample(len)).unwrap();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &encoded, |b, encoded| {
            let mut out = Vec::with_capacity(len);
            b.iter(|| {
                out.clear();
                t.decode(black_box(encoded.as_bytes()), &mut out).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmarks reverse lookup over every symbol of each alphabet.
fn bench_byte_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_for");

    for kind in AlphabetKind::ALL {
        let alphabet = kind.alphabet();
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                alphabet
                    .symbols()
                    .iter()
                    .map(|&s| alphabet.byte_for(black_box(s)) as u32)
                    .sum::<u32>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_byte_for);
criterion_main!(benches);
