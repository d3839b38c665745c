// ============================================================================
// Numeral Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Formatting - quantity to structural numeral
// 2. Reading - numeral text to quantity, per overline tally
// 3. Rendering - structural numeral to display text
// 4. Accumulation - container add with mixed operands
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use roman_numeral::prelude::*;
use std::hint::black_box;

const SAMPLES: [i64; 4] = [4, 2023, 98_765, 987_654];

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn benchmark_to_roman(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_roman");

    for n in SAMPLES.iter() {
        let quantity = NumeralQuantity::from_integer(*n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &quantity, |b, q| {
            b.iter(|| black_box(to_roman(*q)));
        });
    }

    let fractional = NumeralQuantity::from_twelfths(3_999, 11).unwrap();
    group.bench_function("fraction", |b| {
        b.iter(|| black_box(to_roman(fractional)));
    });

    group.finish();
}

// ============================================================================
// Reading Benchmarks
// ============================================================================

fn benchmark_to_arabic(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_arabic");
    let thousandfold = ConverterConfig::classical();
    let base_weight = ConverterConfig::historical();

    for n in SAMPLES.iter() {
        let text = to_roman(NumeralQuantity::from_integer(*n))
            .unwrap()
            .to_string();

        group.bench_with_input(BenchmarkId::new("Thousandfold", n), &text, |b, s| {
            b.iter(|| black_box(to_arabic_with(s, &thousandfold)));
        });

        group.bench_with_input(BenchmarkId::new("BaseWeight", n), &text, |b, s| {
            b.iter(|| black_box(to_arabic_with(s, &base_weight)));
        });
    }

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn benchmark_renderers(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let numeral = to_roman(NumeralQuantity::from_integer(987_654)).unwrap();

    let renderers: [Box<dyn OverlineRenderer>; 3] = [
        Box::new(CombiningOverlineRenderer),
        Box::new(MacronRenderer),
        Box::new(HtmlSpanRenderer::new()),
    ];

    for renderer in renderers.iter() {
        group.bench_function(renderer.name(), |b| {
            b.iter(|| black_box(renderer.render(&numeral)));
        });
    }

    group.finish();
}

// ============================================================================
// Accumulation Benchmarks
// ============================================================================

fn benchmark_accumulation(c: &mut Criterion) {
    c.bench_function("add_mixed_operands", |b| {
        b.iter(|| {
            let mut value = RomanNumeralValue::new();
            for _ in 0..10 {
                value.add("XIV").unwrap();
                value.add(86).unwrap();
            }
            black_box(value.value_as_roman())
        });
    });
}

criterion_group!(
    benches,
    benchmark_to_roman,
    benchmark_to_arabic,
    benchmark_renderers,
    benchmark_accumulation
);
criterion_main!(benches);
