use ck_units::{convert, convert_temperature, QuantityKind, UnitRegistry};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_linear(c: &mut Criterion) {
    // Build the shared registry outside the measured loop.
    let _ = UnitRegistry::standard();
    c.bench_function("length meter->feet", |b| {
        b.iter(|| convert(QuantityKind::Length, black_box(12.5), "meter", "feet"))
    });
    c.bench_function("volume alias lookup", |b| {
        b.iter(|| convert(QuantityKind::Volume, black_box(3.0), "fl oz", "tbsp"))
    });
}

fn bench_temperature(c: &mut Criterion) {
    c.bench_function("celsius->fahrenheit", |b| {
        b.iter(|| convert_temperature(black_box(21.5), "celsius", "fahrenheit"))
    });
}

criterion_group!(benches, bench_linear, bench_temperature);
criterion_main!(benches);
