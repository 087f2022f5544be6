use std::hint::black_box;
use std::time::Instant;

use criterion::criterion_main;
use qibla::session::OrientationSample;
use qibla::{Finder, FinderConfig, GeoPoint, KAABA, compute_bearing, compute_distance_km, project};

struct GuidanceScenario {
    name: &'static str,
    lat: f64,
    lng: f64,
}

const ORIGINS: [GuidanceScenario; 3] = [
    GuidanceScenario {
        name: "NEAR_MECCA",
        lat: 21.0,
        lng: 39.0,
    },
    GuidanceScenario {
        name: "LONDON",
        lat: 51.5074,
        lng: -0.1278,
    },
    GuidanceScenario {
        name: "SYDNEY",
        lat: -33.8568,
        lng: 151.2153,
    },
];

fn geodesy_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("geodesy");

    ORIGINS.iter().for_each(|sc| {
        let origin = GeoPoint::new(sc.lat, sc.lng).expect("Origin must be valid");

        group.bench_function(format!("fix: {}", sc.name), |b| {
            b.iter(|| {
                let bearing = compute_bearing(black_box(origin), KAABA);
                let distance = compute_distance_km(black_box(origin), KAABA);
                project(origin, bearing, black_box(distance))
            })
        });
    });

    group.finish();
}

fn orientation_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("orientation");

    ORIGINS.iter().for_each(|sc| {
        let origin = GeoPoint::new(sc.lat, sc.lng).expect("Origin must be valid");
        let mut finder = Finder::new(FinderConfig::default());
        finder.on_location(Ok(origin)).expect("Fix must be recorded");

        // One full sweep of the compass, as a device spinning in place would report.
        let samples = (0..360)
            .map(|alpha| OrientationSample::absolute(alpha as f64))
            .collect::<Vec<_>>();

        group.bench_function(format!("sweep: {}", sc.name), |b| {
            b.iter(|| {
                let now = Instant::now();
                samples
                    .iter()
                    .filter_map(|sample| finder.on_orientation(black_box(*sample), now))
                    .filter(|guidance| guidance.state.aligned)
                    .count()
            })
        });
    });

    group.finish();
}

criterion::criterion_group!(guidance_benches, geodesy_benchmark, orientation_benchmark);
criterion_main!(guidance_benches);
