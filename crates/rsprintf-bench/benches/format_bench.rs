//! Formatting engine benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rsprintf_core::{FormatArg, format_to_buffer, format_to_vec};

fn bench_literal_passthrough(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096, 65536];
    let mut group = c.benchmark_group("literal_passthrough");

    for &size in sizes {
        let template = vec![b'a'; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("rsprintf", size), &size, |b, _| {
            b.iter(|| {
                let out = format_to_vec(black_box(&template), &[]);
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_integer_radices(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_radices");
    let cases: &[(&str, &[u8])] = &[
        ("decimal", b"%d"),
        ("octal", b"%o"),
        ("hex", b"%x"),
        ("hex_alt_padded", b"%#018x"),
        ("precision", b"%.32d"),
    ];

    for &(label, template) in cases {
        group.bench_function(label, |b| {
            b.iter(|| {
                let out = format_to_vec(
                    black_box(template),
                    &[FormatArg::Int(0x0123_4567_89AB_CDEF_i64)],
                );
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_mixed_template(c: &mut Criterion) {
    let template: &[u8] = b"id=%08x name=%-16s count=%llu ratio=%+.5d tail=%c\n";
    let args = [
        FormatArg::Uint(0xDEAD_BEEF),
        FormatArg::Str(b"subsystem"),
        FormatArg::Uint(u64::MAX),
        FormatArg::Int(-42),
        FormatArg::Char(b'#'),
    ];
    c.bench_function("mixed_template", |b| {
        b.iter(|| {
            let out = format_to_vec(black_box(template), black_box(&args));
            black_box(out);
        });
    });
}

fn bench_bounded_truncation(c: &mut Criterion) {
    let capacities: &[usize] = &[8, 64, 512];
    let mut group = c.benchmark_group("bounded_truncation");
    let template: &[u8] = b"%0128d:%0128d:%0128d";
    let args = [
        FormatArg::Int(1),
        FormatArg::Int(2),
        FormatArg::Int(3),
    ];

    for &cap in capacities {
        group.bench_with_input(BenchmarkId::new("capacity", cap), &cap, |b, &cap| {
            let mut buf = vec![0u8; cap];
            b.iter(|| {
                let total = format_to_buffer(black_box(&mut buf), template, &args);
                black_box(total);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_literal_passthrough,
    bench_integer_radices,
    bench_mixed_template,
    bench_bounded_truncation
);
criterion_main!(benches);
