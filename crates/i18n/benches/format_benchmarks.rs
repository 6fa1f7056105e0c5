use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use boardroom_i18n::{FractionDigits, NumberFormatter, Precision};

const SAMPLES: &[f64] = &[0.0425, 950.0, 1_250_000.0, 999_950.0, 24_000_000_000.0];

fn bench_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let formatter = NumberFormatter::default();

    for locale in ["en-US", "de-DE"] {
        group.bench_with_input(BenchmarkId::new("money_compact", locale), &locale, |b, l| {
            b.iter(|| {
                for v in SAMPLES {
                    black_box(formatter.format_money_compact(black_box(*v), l).unwrap());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("money_full", locale), &locale, |b, l| {
            b.iter(|| {
                for v in SAMPLES {
                    black_box(formatter.format_money_full(black_box(*v), l).unwrap());
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("percent", locale), &locale, |b, l| {
            b.iter(|| {
                for v in SAMPLES {
                    black_box(formatter.format_percent(black_box(*v), l).unwrap());
                }
            })
        });
    }

    group.finish();
}

/// Wider precision means longer digit strings; check it stays cheap.
fn bench_precision(c: &mut Criterion) {
    let wide = NumberFormatter::new(Precision {
        compact: FractionDigits::new(0, 6),
        percent: FractionDigits::new(0, 6),
    });
    c.bench_function("percent_six_digits", |b| {
        b.iter(|| black_box(wide.format_percent(black_box(0.123_456_789), "en-US").unwrap()))
    });
}

criterion_group!(benches, bench_formats, bench_precision);
criterion_main!(benches);
