// benches/rational_operations.rs
//
// 有理数演算のベンチマーク
// 倍幅の中間計算と正規化 (gcd) のコストを測定

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratio_core::{Rational, RationalReader};
use std::io::Cursor;

fn harmonic_terms(n: i32) -> Vec<Rational> {
    (1..=n).map(|k| Rational::new(1, k).unwrap()).collect()
}

/// ベンチマーク1: 構築と正規化
fn bench_construction(c: &mut Criterion) {
    c.bench_function("construction", |b| {
        b.iter(|| Rational::new(black_box(123_456), black_box(-7_890)));
    });
}

/// ベンチマーク2: 加算の連鎖（分母が増えていく）
fn bench_harmonic_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic_sum");
    for size in [4, 8, 16].iter() {
        let terms = harmonic_terms(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &terms, |b, terms| {
            b.iter(|| ratio_core::checked_sum(black_box(terms.iter().copied())));
        });
    }
    group.finish();
}

/// ベンチマーク3: 乗除算
fn bench_mul_div(c: &mut Criterion) {
    let x = Rational::new(355, 113).unwrap();
    let y = Rational::new(-22, 7).unwrap();
    c.bench_function("mul_div", |b| {
        b.iter(|| black_box(x) * black_box(y) / black_box(y));
    });
}

/// ベンチマーク4: ソート（交差乗算比較）
fn bench_sort(c: &mut Criterion) {
    let values: Vec<Rational> = (1..200)
        .map(|k| Rational::new((k * 7919) % 1000 - 500, k).unwrap())
        .collect();
    c.bench_function("sort", |b| {
        b.iter(|| {
            let mut v = values.clone();
            v.sort();
            black_box(v)
        });
    });
}

/// ベンチマーク5: テキストの読み取りと書き出し
fn bench_text(c: &mut Criterion) {
    let input: String = (1..200).map(|k| format!("{}/{} ", k * 3, -k * 4)).collect();
    c.bench_function("parse_stream", |b| {
        b.iter(|| {
            RationalReader::new(Cursor::new(black_box(input.as_bytes())))
                .filter_map(|r| r.ok())
                .count()
        });
    });
    let value = Rational::new(-7, 2).unwrap();
    c.bench_function("display", |b| {
        b.iter(|| black_box(value).to_string());
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_harmonic_sum,
    bench_mul_div,
    bench_sort,
    bench_text
);
criterion_main!(benches);
