use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_core::{
    karana_from_elongation, masa_from_new_moon_longitude, nakshatra_from_longitude,
    rashi_from_longitude, samvatsara_from_year, tithi_from_elongation, yoga_from_sum,
};

fn angular_bench(c: &mut Criterion) {
    let elong = 211.75;
    let sum = 278.31;
    let moon_lon = 250.0;

    let mut group = c.benchmark_group("angular");
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(elong)))
    });
    group.bench_function("karana_from_elongation", |b| {
        b.iter(|| karana_from_elongation(black_box(elong)))
    });
    group.bench_function("yoga_from_sum", |b| {
        b.iter(|| yoga_from_sum(black_box(sum)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(moon_lon)))
    });
    group.finish();
}

fn calendar_bench(c: &mut Criterion) {
    let sun_lon_at_nm = 255.0;

    let mut group = c.benchmark_group("calendar");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(sun_lon_at_nm)))
    });
    group.bench_function("masa_from_new_moon_longitude", |b| {
        b.iter(|| masa_from_new_moon_longitude(black_box(sun_lon_at_nm)))
    });
    group.bench_function("samvatsara_from_year", |b| {
        b.iter(|| samvatsara_from_year(black_box(2024)))
    });
    group.finish();
}

criterion_group!(benches, angular_bench, calendar_bench);
criterion_main!(benches);
