use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pairline::{parse_str, to_line, Pair, PairList};

fn sample_line(entries: usize) -> String {
    let list: PairList = (0..entries)
        .map(|i| match i % 3 {
            0 => Pair::new(format!("key{i}"), format!("value-{i}")),
            1 => Pair::new(format!("msg{i}"), format!("several words here {i}")),
            _ => Pair::bare(format!("flag{i}")),
        })
        .collect();
    to_line(&list)
}

fn benchmark_parse_small(c: &mut Criterion) {
    let line = "host=db.local port=5432 verbose label='staging box'";

    c.bench_function("parse_small_line", |b| {
        b.iter(|| parse_str(black_box(line)))
    });
}

fn benchmark_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_entries");

    for size in [10, 50, 100, 500].iter() {
        let line = sample_line(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &line, |b, line| {
            b.iter(|| parse_str(black_box(line)))
        });
    }

    group.finish();
}

fn benchmark_parse_escape_heavy(c: &mut Criterion) {
    let line = r"a=one\ two\ three b='\t\t\t\t' c=\\\\\\\\ d=\n\r\t\0";

    c.bench_function("parse_escape_heavy", |b| {
        b.iter(|| parse_str(black_box(line)))
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let pairs = parse_str(&sample_line(100)).unwrap();

    c.bench_function("encode_100_entries", |b| {
        b.iter(|| to_line(black_box(&pairs)))
    });
}

criterion_group!(
    benches,
    benchmark_parse_small,
    benchmark_parse_scaling,
    benchmark_parse_escape_heavy,
    benchmark_encode
);
criterion_main!(benches);
