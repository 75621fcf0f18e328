use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonfmt::{format_str, validate_str, FormatOptions};

/// Builds an NDJSON stream of `records` objects with a few mixed fields.
fn sample_stream(records: usize) -> String {
    let mut out = String::new();
    for i in 0..records {
        out.push_str(&format!(
            "{{\"id\": {}, \"name\": \"user-{}\", \"active\": {}, \"score\": {}.5, \"tags\": [\"a\", \"b\", \"c\"]}}\n",
            i,
            i,
            i % 2 == 0,
            i % 100,
        ));
    }
    out
}

/// Builds one deeply nested document.
fn nested_document(depth: usize) -> String {
    let mut out = String::new();
    for _ in 0..depth {
        out.push_str("{\"child\": ");
    }
    out.push_str("{\"leaf\": [1, 2, 3]}");
    for _ in 0..depth {
        out.push('}');
    }
    out
}

fn benchmark_pretty(c: &mut Criterion) {
    let input = sample_stream(100);
    let options = FormatOptions::default();

    c.bench_function("pretty_100_records", |b| {
        b.iter(|| format_str(black_box(&input), &options))
    });
}

fn benchmark_compact(c: &mut Criterion) {
    let input = format_str(&sample_stream(100), &FormatOptions::default()).unwrap();
    let options = FormatOptions::compact();

    c.bench_function("compact_100_pretty_records", |b| {
        b.iter(|| format_str(black_box(&input), &options))
    });
}

fn benchmark_sort_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_keys");
    let options = FormatOptions::compact().with_sort_keys(true);

    for size in [10usize, 100, 1000].iter() {
        let input = sample_stream(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| format_str(black_box(input), &options));
        });
    }
    group.finish();
}

fn benchmark_highlight(c: &mut Criterion) {
    let input = sample_stream(100);
    let options = FormatOptions::new().with_colorize(true);

    c.bench_function("highlight_100_records", |b| {
        b.iter(|| format_str(black_box(&input), &options))
    });
}

fn benchmark_validate(c: &mut Criterion) {
    let input = sample_stream(1000);

    c.bench_function("validate_1000_records", |b| {
        b.iter(|| validate_str(black_box(&input)))
    });
}

fn benchmark_nested(c: &mut Criterion) {
    let input = nested_document(64);
    let options = FormatOptions::default();

    c.bench_function("pretty_nested_64_levels", |b| {
        b.iter(|| format_str(black_box(&input), &options))
    });
}

criterion_group!(
    benches,
    benchmark_pretty,
    benchmark_compact,
    benchmark_sort_keys,
    benchmark_highlight,
    benchmark_validate,
    benchmark_nested,
);
criterion_main!(benches);
