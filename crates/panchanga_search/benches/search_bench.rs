use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_search::{
    Geocoder, LocationDetails, MeanMotionProvider, RecurrenceConfig, SearchBound, find_recurrences,
    snapshot_at,
};
use panchanga_time::{CivilDate, LocalDateTime, UtcTime, WallClock};

fn provider() -> MeanMotionProvider {
    MeanMotionProvider::new(UtcTime::new(2024, 3, 21, 0, 0, 0.0))
}

fn bengaluru(p: &MeanMotionProvider) -> LocationDetails {
    p.resolve("Bengaluru").unwrap()
}

fn reference() -> LocalDateTime {
    LocalDateTime::new(
        CivilDate::new(2024, 3, 21).unwrap(),
        WallClock::new(6, 30, 0.0).unwrap(),
    )
}

fn snapshot_bench(c: &mut Criterion) {
    let p = provider();
    let loc = bengaluru(&p);
    let local = reference();

    let mut group = c.benchmark_group("snapshot");
    group.bench_function("snapshot_at", |b| {
        b.iter(|| snapshot_at(&p, black_box(&local), &loc))
    });
    group.finish();
}

fn recurrence_bench(c: &mut Criterion) {
    let p = provider();
    let loc = bengaluru(&p);
    let local = reference();
    let config = RecurrenceConfig {
        start_year: Some(2025),
        ..RecurrenceConfig::default()
    };

    let mut group = c.benchmark_group("recurrence");
    group.sample_size(20);
    group.bench_function("find_recurrences_5_years", |b| {
        b.iter(|| {
            find_recurrences(
                &p,
                black_box(&local),
                &loc,
                SearchBound::Years(5),
                &config,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, snapshot_bench, recurrence_bench);
criterion_main!(benches);
