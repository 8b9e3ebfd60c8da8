//! Benchmarks for layout and scene construction - the per-update work that
//! runs on every data or configuration change.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use radarviz::config::ChartConfig;
use radarviz::data::extract;
use radarviz::layout::ChartLayout;
use radarviz::render::{render, MemorySurface};
use radarviz::scene::build;
use radarviz::types::{Cell, Field, QuerySchema, Row};

fn synthetic_schema(num_measures: usize) -> QuerySchema {
    QuerySchema {
        dimension_like: vec![Field {
            name: "dim".to_string(),
            label: "Dimension".to_string(),
            label_short: None,
        }],
        measure_like: (0..num_measures)
            .map(|i| Field {
                name: format!("measure_{i}"),
                label: format!("Measure {i}"),
                label_short: None,
            })
            .collect(),
    }
}

fn synthetic_rows(schema: &QuerySchema, num_rows: usize) -> Vec<Row> {
    (0..num_rows)
        .map(|r| {
            let mut row = Row::new();
            row.insert(
                "dim".to_string(),
                Cell {
                    value: serde_json::Value::String(format!("Series {r}")),
                },
            );
            for (i, measure) in schema.measure_like.iter().enumerate() {
                row.insert(
                    measure.name.clone(),
                    Cell {
                        value: serde_json::Value::from((r * 13 + i * 7) % 100),
                    },
                );
            }
            row
        })
        .collect()
}

fn bench_scene_build(c: &mut Criterion) {
    let schema = synthetic_schema(8);
    let rows = synthetic_rows(&schema, 10);
    let config = ChartConfig::default();

    c.bench_function("scene_build_8_axes_10_series", |b| {
        b.iter(|| {
            let dataset = extract(black_box(&rows), &schema, &config).unwrap();
            let layout = ChartLayout::compute(1280.0, 720.0, 8, dataset.max_value);
            black_box(build(&schema.measure_like, &dataset, &config, &layout))
        })
    });
}

fn bench_full_reconcile(c: &mut Criterion) {
    let schema = synthetic_schema(8);
    let rows = synthetic_rows(&schema, 10);
    let config = ChartConfig::default();
    let dataset = extract(&rows, &schema, &config).unwrap();
    let layout = ChartLayout::compute(1280.0, 720.0, 8, dataset.max_value);
    let scene = build(&schema.measure_like, &dataset, &config, &layout);

    c.bench_function("reconcile_steady_state", |b| {
        let mut surface = MemorySurface::new();
        render(&scene, &mut surface).unwrap();
        b.iter(|| render(black_box(&scene), &mut surface).unwrap())
    });
}

criterion_group!(benches, bench_scene_build, bench_full_reconcile);
criterion_main!(benches);
