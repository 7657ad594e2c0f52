//! Token pipeline benchmarks
//!
//! Benchmarks encoding, decoding and the signature step on its own, plus
//! decoding by payload size.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hsjwt::*;

/// Helper to generate test claims of different sizes
mod helpers {
    use hsjwt::Claims;

    pub fn claims_with_subject_size(subject_size: usize) -> Claims {
        Claims::new()
            .issuer("https://example.com")
            .audience("api")
            .subject("x".repeat(subject_size))
            .issued_at(1516239022)
            .expires_at(9999999999)
    }
}

fn bench_pipeline(c: &mut Criterion) {
    let secret = b"test-secret-key";
    let claims = helpers::claims_with_subject_size(16);
    let token = encode(&claims, secret).unwrap();
    let (_, payload, signature) = split_token(&token).unwrap();

    let mut group = c.benchmark_group("pipeline");

    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&claims), black_box(secret)));
    });

    group.bench_function("decode", |b| {
        b.iter(|| decode(black_box(&token), black_box(secret)));
    });

    group.bench_function("sign", |b| {
        b.iter(|| sign(black_box(payload), black_box(secret)));
    });

    group.bench_function("verify", |b| {
        b.iter(|| verify(HEADER, black_box(payload), black_box(signature), secret));
    });

    group.bench_function("split_token", |b| {
        b.iter(|| split_token(black_box(&token)));
    });

    group.finish();
}

fn bench_decode_by_size(c: &mut Criterion) {
    let secret = b"test-secret-key";
    let sizes = vec![64, 256, 1024, 4096, 16384];

    let mut group = c.benchmark_group("decode_by_size");

    for size in sizes {
        let token = encode(&helpers::claims_with_subject_size(size), secret).unwrap();
        group.throughput(Throughput::Bytes(token.len() as u64));
        group.bench_function(format!("size_{}", size), |b| {
            b.iter(|| decode(black_box(&token), black_box(secret)));
        });
    }

    group.finish();
}

fn bench_rejection(c: &mut Criterion) {
    let secret = b"test-secret-key";
    let token = encode(&helpers::claims_with_subject_size(16), secret).unwrap();

    let mut group = c.benchmark_group("rejection");

    group.bench_function("wrong_secret", |b| {
        b.iter(|| decode(black_box(&token), black_box(b"wrong-secret")));
    });

    group.bench_function("wrong_segment_count", |b| {
        b.iter(|| decode(black_box("a.b"), black_box(secret)));
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_decode_by_size, bench_rejection);
criterion_main!(benches);
