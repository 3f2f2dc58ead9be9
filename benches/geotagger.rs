use criterion::{Criterion, criterion_group, criterion_main};
use geotagger::encode::coordinate::convert;
use geotagger::encode::rational::rationalize;
use geotagger::structs::GeoFix;
use geotagger::tags::assignments;
use std::hint::black_box;

fn bench(c: &mut Criterion) {
    c.bench_function("coordinate::convert", |b| {
        b.iter(|| convert(black_box(52.379_189)).unwrap());
    });

    c.bench_function("rational::rationalize", |b| {
        b.iter(|| rationalize(black_box(3.141_592_65)).unwrap());
    });

    let fix = GeoFix {
        latitude: 52.379_189,
        longitude: 4.899_431,
        altitude: Some(10.5),
        direction: Some(123.45),
        pitch: Some(-2.5),
    };
    c.bench_function("tags::assignments", |b| {
        b.iter(|| assignments(black_box(&fix), "geotagger").unwrap());
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
