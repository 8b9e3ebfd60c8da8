//! Tests for configuration parsing, clamping, and option regeneration.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]


use radarviz::config::{
    default_color, default_plugin_options, derive_style_options, ChartConfig, LegendPosition,
};
use radarviz::types::ElementKind;
use serde_json::json;
use test_case::test_case;
use test_helpers::{field, field_short};

#[test]
fn defaults_when_config_is_empty() {
    let config = ChartConfig::from_value(&json!({}));
    assert!(config.show_legend);
    assert!(config.show_axis_value);
    assert_eq!(config.grid_line_interval, 1);
    assert_eq!(config.legend_position, LegendPosition::Right);
}

#[test]
fn defaults_when_config_is_not_an_object() {
    let config = ChartConfig::from_value(&json!(null));
    assert!(config.show_legend);
    assert_eq!(config.grid_line_interval, 1);
}

#[test]
fn grid_interval_is_clamped() {
    for (raw, expected) in [
        (json!(0), 1),
        (json!(7), 7),
        (json!(42), 10),
        (json!(3.7), 3),
        (json!("not a number"), 1),
    ] {
        let config = ChartConfig::from_value(&json!({ "grid_line_interval": raw }));
        assert_eq!(config.grid_line_interval, expected, "raw interval {raw}");
    }
}

#[test_case("right", LegendPosition::Right)]
#[test_case("left", LegendPosition::Left)]
#[test_case("bottom", LegendPosition::Bottom)]
#[test_case("sideways", LegendPosition::Right; "unknown falls back to right")]
fn legend_position_parses(raw: &str, expected: LegendPosition) {
    let config = ChartConfig::from_value(&json!({ "legend_position": raw }));
    assert_eq!(config.legend_position, expected);
}

#[test]
fn toggles_read_from_config() {
    let config = ChartConfig::from_value(&json!({
        "show_legend": false,
        "show_axis_value": false,
    }));
    assert!(!config.show_legend);
    assert!(!config.show_axis_value);
}

#[test]
fn label_override_wins_over_field_labels() {
    let config = ChartConfig::from_value(&json!({
        "measure_label_orders.count": "Orders",
    }));
    let f = field_short("orders.count", "Orders Count", "Count");
    assert_eq!(config.measure_label(&f), "Orders");
}

#[test]
fn empty_label_override_counts_as_unset() {
    let config = ChartConfig::from_value(&json!({
        "measure_label_orders.count": "",
    }));
    let f = field_short("orders.count", "Orders Count", "Count");
    assert_eq!(config.measure_label(&f), "Count");
}

#[test]
fn color_override_wins_over_palette() {
    let config = ChartConfig::from_value(&json!({
        "measure_color_orders.count": "#123456",
    }));
    assert_eq!(config.measure_color("orders.count", 0), "#123456");
    // a measure without an override takes the palette color at its index
    assert_eq!(config.measure_color("orders.total", 1), default_color(1));
}

#[test]
fn regeneration_yields_two_options_per_measure_in_order() {
    let measures = vec![
        field_short("sales", "Total Sales", "Sales"),
        field("profit", "Profit"),
    ];
    let options = derive_style_options(&measures);
    assert_eq!(options.len(), 4);

    assert_eq!(options[0].id, "measure_label_sales");
    assert_eq!(options[0].kind, ElementKind::Text);
    assert_eq!(options[0].label, "Sales Label");
    assert_eq!(options[0].default, Some(json!("Sales")));
    assert_eq!(options[0].placeholder.as_deref(), Some("Sales"));

    assert_eq!(options[1].id, "measure_color_sales");
    assert_eq!(options[1].kind, ElementKind::Color);
    assert_eq!(options[1].default, Some(json!(default_color(0))));

    assert_eq!(options[2].id, "measure_label_profit");
    assert_eq!(options[3].id, "measure_color_profit");
    assert_eq!(options[3].default, Some(json!(default_color(1))));
}

#[test]
fn regeneration_discards_options_for_absent_measures() {
    let old = derive_style_options(&[field("sales", "Sales"), field("profit", "Profit")]);
    assert!(old.iter().any(|o| o.id.ends_with("profit")));

    // the measure set changed: the new list replaces the old wholesale
    let new = derive_style_options(&[field("sales", "Sales"), field("units", "Units")]);
    assert_eq!(new.len(), 4);
    assert!(!new.iter().any(|o| o.id.ends_with("profit")));
    assert!(new.iter().any(|o| o.id == "measure_label_units"));
}

#[test]
fn regeneration_of_no_measures_is_empty() {
    assert!(derive_style_options(&[]).is_empty());
}

#[test]
fn plugin_descriptor_declares_all_recognized_options() {
    let options = default_plugin_options();

    assert_eq!(options.style_tab.label, "Style");
    assert_eq!(options.style_tab.default, Some(true));
    assert!(options.style_tab.elements.is_empty());

    let legend = &options.legend_tab.elements;
    assert_eq!(legend[0].id, "show_legend");
    assert_eq!(legend[0].kind, ElementKind::Boolean);
    assert_eq!(legend[0].default, Some(json!(true)));
    assert_eq!(legend[1].id, "grid_line_interval");
    assert_eq!(legend[1].kind, ElementKind::Integer);
    assert_eq!((legend[1].min, legend[1].max), (Some(1), Some(10)));
    assert_eq!(legend[1].display_as.as_deref(), Some("range"));

    let axis = &options.axis_tab.elements;
    assert_eq!(axis[0].id, "show_axis_value");
    assert_eq!(axis[1].id, "legend_position");
    assert_eq!(axis[1].kind, ElementKind::RadioButtons);
    assert_eq!(axis[1].default, Some(json!("right")));
    let choices = axis[1].options.as_ref().unwrap();
    assert_eq!(choices.len(), 3);
    assert_eq!(choices[0].get("Right").map(String::as_str), Some("right"));
}

#[test]
fn descriptor_serializes_with_host_field_names() {
    let value = serde_json::to_value(default_plugin_options()).unwrap();
    assert_eq!(value["legend_tab"]["type"], json!("section"));
    assert_eq!(value["axis_tab"]["elements"][1]["type"], json!("radio_buttons"));
    assert_eq!(
        value["axis_tab"]["elements"][1]["display_size"],
        json!("half")
    );
}
