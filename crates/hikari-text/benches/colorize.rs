//! Tokenizer throughput.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hikari_text::{colorize, strip_color};

fn sample_line(codes: usize) -> String {
    let mut line = String::new();
    for i in 0..codes {
        if i % 2 == 0 {
            line.push_str("&a&lGreen bold ");
        } else {
            line.push_str("&#FF8800orange text ");
        }
    }
    line
}

fn colorize_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("colorize");

    for codes in [0, 4, 32, 256] {
        let line = sample_line(codes);
        group.throughput(Throughput::Bytes(line.len() as u64));

        group.bench_with_input(BenchmarkId::new("colorize", codes), &line, |b, line| {
            b.iter(|| black_box(colorize(line)));
        });

        let colored = colorize(&line);
        group.bench_with_input(BenchmarkId::new("strip", codes), &colored, |b, colored| {
            b.iter(|| black_box(strip_color(colored)));
        });
    }

    group.finish();
}

criterion_group!(benches, colorize_benchmarks);
criterion_main!(benches);
