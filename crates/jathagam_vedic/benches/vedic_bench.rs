use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jathagam_core::{AnalyticEphemeris, Body, Ephemeris};
use jathagam_time::JulianDay;
use jathagam_vedic::{
    DoshaRegistry, HoroscopeProfile, build_chart, calculate_porutham, resolve_nakshatra,
};

const JD: JulianDay = JulianDay::new(2_448_057.708_333_3);

fn ephemeris_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();

    let mut group = c.benchmark_group("ephemeris");
    group.bench_function("moon_longitude", |b| {
        b.iter(|| eph.longitude(black_box(JD), Body::Moon))
    });
    group.bench_function("saturn_longitude", |b| {
        b.iter(|| eph.longitude(black_box(JD), Body::Saturn))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let registry = DoshaRegistry::standard();

    let mut group = c.benchmark_group("chart");
    group.bench_function("build_chart", |b| b.iter(|| build_chart(&eph, black_box(JD))));
    let chart = build_chart(&eph, JD).unwrap();
    group.bench_function("detect_doshas", |b| {
        b.iter(|| registry.detect(black_box(&chart)))
    });
    group.bench_function("resolve_nakshatra", |b| {
        b.iter(|| resolve_nakshatra(black_box(317.756)))
    });
    group.finish();
}

fn porutham_bench(c: &mut Criterion) {
    let groom = HoroscopeProfile::from_longitudes(317.756, 347.106);
    let bride = HoroscopeProfile::from_longitudes(46.7, 120.0);

    let mut group = c.benchmark_group("porutham");
    group.bench_function("calculate_porutham", |b| {
        b.iter(|| calculate_porutham(black_box(&groom), black_box(&bride)))
    });
    group.finish();
}

criterion_group!(benches, ephemeris_bench, chart_bench, porutham_bench);
criterion_main!(benches);
