//! Tests for series extraction from host rows.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]


use radarviz::config::ChartConfig;
use radarviz::data::extract;
use radarviz::error::VizError;
use radarviz::types::QuerySchema;
use serde_json::json;
use test_helpers::{row, schema};

fn quarters_schema() -> QuerySchema {
    schema(
        &[("orders.quarter", "Quarter")],
        &[
            ("orders.sales", "Sales"),
            ("orders.profit", "Profit"),
            ("orders.units", "Units"),
        ],
    )
}

#[test]
fn one_series_per_row_in_row_order() {
    let rows = vec![
        row(&[
            ("orders.quarter", json!("Q1")),
            ("orders.sales", json!(10)),
            ("orders.profit", json!(5)),
            ("orders.units", json!(2)),
        ]),
        row(&[
            ("orders.quarter", json!("Q2")),
            ("orders.sales", json!(20)),
            ("orders.profit", json!(15)),
            ("orders.units", json!(8)),
        ]),
    ];
    let dataset = extract(&rows, &quarters_schema(), &ChartConfig::default()).unwrap();

    assert_eq!(dataset.series.len(), 2);
    assert_eq!(dataset.series[0].name, "Q1");
    assert_eq!(dataset.series[1].name, "Q2");
    assert_eq!(dataset.max_value, 20.0);
}

#[test]
fn axes_follow_measure_field_order() {
    let rows = vec![row(&[
        ("orders.quarter", json!("Q1")),
        ("orders.sales", json!(10)),
        ("orders.profit", json!(5)),
        ("orders.units", json!(2)),
    ])];
    let dataset = extract(&rows, &quarters_schema(), &ChartConfig::default()).unwrap();

    let axes = &dataset.series[0].axes;
    assert_eq!(axes.len(), 3);
    assert_eq!(axes[0].measure, "orders.sales");
    assert_eq!(axes[1].measure, "orders.profit");
    assert_eq!(axes[2].measure, "orders.units");
    assert_eq!(axes[0].value, 10.0);
    assert_eq!(axes[0].label, "Sales");
}

#[test]
fn configured_labels_flow_into_axis_points() {
    let config = ChartConfig::from_value(&json!({
        "measure_label_orders.sales": "Revenue",
    }));
    let rows = vec![row(&[
        ("orders.quarter", json!("Q1")),
        ("orders.sales", json!(10)),
        ("orders.profit", json!(5)),
        ("orders.units", json!(2)),
    ])];
    let dataset = extract(&rows, &quarters_schema(), &config).unwrap();
    assert_eq!(dataset.series[0].axes[0].label, "Revenue");
    assert_eq!(dataset.series[0].axes[1].label, "Profit");
}

#[test]
fn missing_and_non_numeric_cells_resolve_to_zero_flagged() {
    let rows = vec![row(&[
        ("orders.quarter", json!("Q1")),
        ("orders.sales", json!("n/a")),
        ("orders.profit", json!(null)),
        // orders.units absent entirely
    ])];
    let dataset = extract(&rows, &quarters_schema(), &ChartConfig::default()).unwrap();

    let axes = &dataset.series[0].axes;
    for point in axes {
        assert_eq!(point.value, 0.0);
        assert!(point.missing, "{} should be flagged missing", point.measure);
    }
    // no numeric values at all: degenerate maximum
    assert_eq!(dataset.max_value, 0.0);
}

#[test]
fn genuine_zero_is_not_flagged() {
    let rows = vec![row(&[
        ("orders.quarter", json!("Q1")),
        ("orders.sales", json!(0)),
        ("orders.profit", json!(1)),
        ("orders.units", json!(2)),
    ])];
    let dataset = extract(&rows, &quarters_schema(), &ChartConfig::default()).unwrap();
    assert!(!dataset.series[0].axes[0].missing);
}

#[test]
fn numeric_strings_participate_in_the_maximum() {
    let rows = vec![row(&[
        ("orders.quarter", json!("Q1")),
        ("orders.sales", json!("42.5")),
        ("orders.profit", json!(1)),
        ("orders.units", json!(2)),
    ])];
    let dataset = extract(&rows, &quarters_schema(), &ChartConfig::default()).unwrap();
    assert_eq!(dataset.series[0].axes[0].value, 42.5);
    assert_eq!(dataset.max_value, 42.5);
}

#[test]
fn empty_rows_yield_empty_dataset_with_degenerate_max() {
    let dataset = extract(&[], &quarters_schema(), &ChartConfig::default()).unwrap();
    assert!(dataset.series.is_empty());
    assert_eq!(dataset.max_value, 0.0);
}

#[test]
fn missing_dimension_is_a_schema_error() {
    let bad = schema(&[], &[("orders.sales", "Sales")]);
    let err = extract(&[], &bad, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, VizError::Schema(_)));
}

#[test]
fn no_measures_is_a_schema_error() {
    let bad = schema(&[("orders.quarter", "Quarter")], &[]);
    let err = extract(&[], &bad, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, VizError::Schema(_)));
}

#[test]
fn duplicate_dimension_values_get_distinct_keys() {
    let rows = vec![
        row(&[
            ("orders.quarter", json!("Q1")),
            ("orders.sales", json!(1)),
            ("orders.profit", json!(1)),
            ("orders.units", json!(1)),
        ]),
        row(&[
            ("orders.quarter", json!("Q1")),
            ("orders.sales", json!(2)),
            ("orders.profit", json!(2)),
            ("orders.units", json!(2)),
        ]),
    ];
    let dataset = extract(&rows, &quarters_schema(), &ChartConfig::default()).unwrap();
    assert_eq!(dataset.series[0].name, dataset.series[1].name);
    assert_ne!(dataset.series[0].key, dataset.series[1].key);
}

#[test]
fn negative_values_keep_their_maximum() {
    let s = schema(&[("d", "D")], &[("m", "M")]);
    let rows = vec![
        row(&[("d", json!("a")), ("m", json!(-5))]),
        row(&[("d", json!("b")), ("m", json!(-2))]),
    ];
    let dataset = extract(&rows, &s, &ChartConfig::default()).unwrap();
    assert_eq!(dataset.max_value, -2.0);
}

#[test]
fn dimension_cell_absent_renders_an_empty_name() {
    let s = schema(&[("d", "D")], &[("m", "M")]);
    let rows = vec![row(&[("m", json!(3))])];
    let dataset = extract(&rows, &s, &ChartConfig::default()).unwrap();
    assert_eq!(dataset.series[0].name, "");
    assert_eq!(dataset.series[0].axes[0].value, 3.0);
}
