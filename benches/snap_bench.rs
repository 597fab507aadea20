//! Criterion benchmarks for placement snapping.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wallsnap_rs::snap::snap_placement;
use wallsnap_rs::types::{PlacedUnit, Rotation, ShapeCategory, SnapConfig, Vec3};

/// A perimeter-style run of mixed units along X, one row every 10.
fn layout(n: usize) -> Vec<PlacedUnit> {
    let categories = [
        ShapeCategory::Rectangular,
        ShapeCategory::Rectangular,
        ShapeCategory::Corner90,
        ShapeCategory::Corner45,
    ];
    (0..n)
        .map(|i| PlacedUnit {
            id: format!("unit_{i}"),
            category: categories[i % categories.len()],
            thickness: 12.0,
            position: Vec3::new((i % 10) as f64 * 48.0, 0.0, (i / 10) as f64 * 64.0),
            rotation: Rotation::ALL[i % 4],
        })
        .collect()
}

fn bench_snap(c: &mut Criterion) {
    let config = SnapConfig::default();
    for n in [10, 200] {
        let units = layout(n);
        c.bench_function(&format!("snap_placement_{n}_units"), |b| {
            b.iter(|| {
                snap_placement(
                    black_box(Vec3::new(250.0, 0.0, 70.0)),
                    ShapeCategory::Rectangular,
                    12.0,
                    Rotation::Deg90,
                    black_box(&units),
                    &config,
                )
            })
        });
    }
}

fn bench_grid_fallback(c: &mut Criterion) {
    let config = SnapConfig::default();
    let units = layout(200);
    c.bench_function("snap_placement_grid_fallback", |b| {
        b.iter(|| {
            snap_placement(
                black_box(Vec3::new(-5000.0, 3.0, -5000.0)),
                ShapeCategory::Corner90,
                12.0,
                Rotation::Deg180,
                black_box(&units),
                &config,
            )
        })
    });
}

criterion_group!(benches, bench_snap, bench_grid_fallback);
criterion_main!(benches);
