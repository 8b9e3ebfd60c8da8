//! Configuration snapshot and per-measure option regeneration.
//!
//! The host passes a flat configuration object on every update. We read it
//! as a snapshot (`ChartConfig::from_value`), never mutate it, and hand the
//! host a freshly derived Style option list (`derive_style_options`) so its
//! settings panel tracks the current measure set.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ConfigElement, ConfigSection, Field, PluginOptions};

/// Default series/measure color palette, cycled by index.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Grid line interval bounds; out-of-range values are clamped.
pub const GRID_INTERVAL_MIN: u32 = 1;
pub const GRID_INTERVAL_MAX: u32 = 10;
const GRID_INTERVAL_DEFAULT: u32 = 1;

const LABEL_ID_PREFIX: &str = "measure_label_";
const COLOR_ID_PREFIX: &str = "measure_color_";

/// Where the legend is stacked. Unknown values fall back to `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[default]
    Right,
    Left,
    Bottom,
}

impl LegendPosition {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("left") => Self::Left,
            Some("bottom") => Self::Bottom,
            _ => Self::Right,
        }
    }
}

/// Parsed snapshot of the host configuration for one update pass.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub show_legend: bool,
    pub show_axis_value: bool,
    /// Concentric grid circle count, clamped to [1, 10].
    pub grid_line_interval: u32,
    pub legend_position: LegendPosition,
    labels: HashMap<String, String>,
    colors: HashMap<String, String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_axis_value: true,
            grid_line_interval: GRID_INTERVAL_DEFAULT,
            legend_position: LegendPosition::Right,
            labels: HashMap::new(),
            colors: HashMap::new(),
        }
    }
}

impl ChartConfig {
    /// Read a snapshot from the host's flat configuration object.
    ///
    /// Tolerant by design: missing keys take defaults, the grid interval is
    /// clamped into range, unknown legend positions fall back to `right`,
    /// and empty-string overrides count as unset.
    #[must_use]
    pub fn from_value(raw: &serde_json::Value) -> Self {
        let Some(map) = raw.as_object() else {
            return Self::default();
        };

        let mut config = Self {
            show_legend: map
                .get("show_legend")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(true),
            show_axis_value: map
                .get("show_axis_value")
                .and_then(serde_json::Value::as_bool)
                .unwrap_or(true),
            grid_line_interval: map
                .get("grid_line_interval")
                .and_then(serde_json::Value::as_f64)
                .map_or(GRID_INTERVAL_DEFAULT, clamp_grid_interval),
            legend_position: LegendPosition::parse(
                map.get("legend_position").and_then(serde_json::Value::as_str),
            ),
            labels: HashMap::new(),
            colors: HashMap::new(),
        };

        for (key, value) in map {
            let Some(text) = value.as_str() else { continue };
            if text.is_empty() {
                continue;
            }
            if let Some(name) = key.strip_prefix(LABEL_ID_PREFIX) {
                config.labels.insert(name.to_string(), text.to_string());
            } else if let Some(name) = key.strip_prefix(COLOR_ID_PREFIX) {
                config.colors.insert(name.to_string(), text.to_string());
            }
        }

        config
    }

    /// Axis label for a measure: the user override, or the field's
    /// short/long label.
    #[must_use]
    pub fn measure_label<'a>(&'a self, field: &'a Field) -> &'a str {
        self.labels
            .get(&field.name)
            .map_or_else(|| field.display_label(), String::as_str)
    }

    /// Marker color for a measure: the user override, or the palette color
    /// at the measure's index.
    #[must_use]
    pub fn measure_color(&self, field_name: &str, index: usize) -> String {
        self.colors
            .get(field_name)
            .cloned()
            .unwrap_or_else(|| default_color(index).to_string())
    }
}

fn clamp_grid_interval(raw: f64) -> u32 {
    if !raw.is_finite() {
        return GRID_INTERVAL_DEFAULT;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = raw.clamp(f64::from(GRID_INTERVAL_MIN), f64::from(GRID_INTERVAL_MAX)) as u32;
    value
}

/// Palette color at `index`, cycling.
#[allow(clippy::indexing_slicing)] // Safe: modulo ensures index is within bounds
#[must_use]
pub fn default_color(index: usize) -> &'static str {
    DEFAULT_COLORS[index % DEFAULT_COLORS.len()]
}

/// Series (polygon + legend) color: palette color by series index.
#[must_use]
pub fn series_color(index: usize) -> &'static str {
    default_color(index)
}

/// Regenerate the Style options for the current measure set: one label
/// override and one color override per measure, in measure order.
///
/// Pure request/response: the returned list replaces any prior list
/// wholesale, so options for measures no longer present simply vanish.
#[must_use]
pub fn derive_style_options(measures: &[Field]) -> Vec<ConfigElement> {
    let mut elements = Vec::with_capacity(measures.len() * 2);
    for (i, measure) in measures.iter().enumerate() {
        let display = measure.display_label();
        elements.push(ConfigElement::text(
            &format!("{LABEL_ID_PREFIX}{}", measure.name),
            &format!("{display} Label"),
            display,
        ));
        elements.push(ConfigElement::color(
            &format!("{COLOR_ID_PREFIX}{}", measure.name),
            &format!("{display} Color"),
            default_color(i),
        ));
    }
    elements
}

/// The registration descriptor: Style tab (dynamically populated), Legend
/// tab, and Axis tab, with the recognized option kinds and defaults.
#[must_use]
pub fn default_plugin_options() -> PluginOptions {
    let mut style_tab = ConfigSection::new("Style", Vec::new());
    style_tab.default = Some(true);

    let legend_tab = ConfigSection::new(
        "Legend",
        vec![
            ConfigElement::boolean("show_legend", "Show Legend", true),
            ConfigElement::integer_range(
                "grid_line_interval",
                "Grid Line Interval",
                i64::from(GRID_INTERVAL_DEFAULT),
                i64::from(GRID_INTERVAL_MIN),
                i64::from(GRID_INTERVAL_MAX),
            ),
        ],
    );

    let axis_tab = ConfigSection::new(
        "Axis",
        vec![
            ConfigElement::boolean("show_axis_value", "Show Axis Value", true),
            ConfigElement::radio_buttons(
                "legend_position",
                "Legend Position",
                "right",
                &[("Right", "right"), ("Left", "left"), ("Bottom", "bottom")],
            ),
        ],
    );

    PluginOptions {
        style_tab,
        legend_tab,
        axis_tab,
    }
}
