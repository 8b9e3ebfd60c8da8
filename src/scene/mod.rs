//! The keyed visual-node model.
//!
//! One `Scene` is built per update from the dataset, configuration, and
//! layout, then reconciled onto a [`crate::render::Surface`]. Every node
//! carries a stable identity key so surfaces can apply enter/update/exit
//! semantics instead of tearing the chart down.

use crate::config::{series_color, ChartConfig};
use crate::data::Dataset;
use crate::layout::ChartLayout;
use crate::types::Field;

/// Datum behind a marker, rendered into the tooltip on hover.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverData {
    pub series: String,
    pub label: String,
    pub value: f64,
    pub missing: bool,
}

impl HoverData {
    /// Tooltip markup: bold series name, then "label: value". Absent cells
    /// render an em dash so a genuine 0 stays distinguishable.
    #[must_use]
    pub fn tooltip_html(&self) -> String {
        let value = if self.missing {
            "\u{2014}".to_string()
        } else {
            format_value(self.value)
        };
        format!(
            "<strong>{}</strong><br/>{}: {}",
            escape_html(&self.series),
            escape_html(&self.label),
            value
        )
    }
}

fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Geometry and styling of one visual element.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Concentric grid circle, chart-local.
    GridCircle { r: f64 },
    /// Axis line from the center to the domain maximum.
    AxisLine { x2: f64, y2: f64 },
    /// Axis label past the axis endpoint; `visible` follows the
    /// `show_axis_value` toggle on both enter and update paths.
    AxisLabel {
        x: f64,
        y: f64,
        text: String,
        visible: bool,
    },
    /// Closed series polygon.
    Polygon { path: String, color: String },
    /// Per-(series, axis) data point with hover data.
    Marker {
        cx: f64,
        cy: f64,
        color: String,
        hover: HoverData,
    },
    /// Legend row: swatch + series name. Offsets are applied by the render
    /// pass after the surface has a chance to measure the rendered row.
    LegendItem { color: String, label: String },
}

/// A keyed visual element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub key: String,
    pub shape: Shape,
}

impl Node {
    fn new(key: impl Into<String>, shape: Shape) -> Self {
        Self {
            key: key.into(),
            shape,
        }
    }
}

/// All visual elements for one update, grouped by layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Container size the scene was laid out for.
    pub width: f64,
    pub height: f64,
    /// Chart group translation (the container midpoint).
    pub chart_translate: (f64, f64),
    pub legend_visible: bool,
    pub legend_position: crate::config::LegendPosition,
    pub grid: Vec<Node>,
    pub axes: Vec<Node>,
    pub labels: Vec<Node>,
    pub polygons: Vec<Node>,
    pub markers: Vec<Node>,
    pub legend: Vec<Node>,
}

impl Scene {
    /// The degraded scene for an unusable schema: every layer reconciles to
    /// zero nodes, so a previously drawn chart empties out cleanly.
    #[must_use]
    pub fn empty(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            chart_translate: (width / 2.0, height / 2.0),
            legend_visible: false,
            legend_position: crate::config::LegendPosition::Right,
            grid: Vec::new(),
            axes: Vec::new(),
            labels: Vec::new(),
            polygons: Vec::new(),
            markers: Vec::new(),
            legend: Vec::new(),
        }
    }

    /// Total node count across layers (grid + axes + labels + polygons +
    /// markers + legend).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.grid.len()
            + self.axes.len()
            + self.labels.len()
            + self.polygons.len()
            + self.markers.len()
            + self.legend.len()
    }
}

/// Build the scene for one update.
///
/// Keys: grid circles by level, axis lines/labels by measure name, polygons
/// and legend rows by series key, markers by series key × measure name.
#[must_use]
pub fn build(
    measures: &[Field],
    dataset: &Dataset,
    config: &ChartConfig,
    layout: &ChartLayout,
) -> Scene {
    let interval = config.grid_line_interval;
    let grid = (1..=interval)
        .map(|level| {
            Node::new(
                format!("level-{level}"),
                Shape::GridCircle {
                    r: layout.grid_radius(level, interval),
                },
            )
        })
        .collect();

    let axes = measures
        .iter()
        .enumerate()
        .map(|(i, measure)| {
            let (x2, y2) = layout.axis_endpoint(i);
            Node::new(measure.name.clone(), Shape::AxisLine { x2, y2 })
        })
        .collect();

    let labels = measures
        .iter()
        .enumerate()
        .map(|(i, measure)| {
            let (x, y) = layout.label_anchor(i);
            Node::new(
                measure.name.clone(),
                Shape::AxisLabel {
                    x,
                    y,
                    text: config.measure_label(measure).to_string(),
                    visible: config.show_axis_value,
                },
            )
        })
        .collect();

    let polygons = dataset
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            Node::new(
                series.key.clone(),
                Shape::Polygon {
                    path: layout.polygon_path(&series.axes),
                    color: series_color(i).to_string(),
                },
            )
        })
        .collect();

    let mut markers = Vec::new();
    for series in &dataset.series {
        for (axis_idx, point) in series.axes.iter().enumerate() {
            let (cx, cy) = layout.vertex(axis_idx, point.value);
            markers.push(Node::new(
                format!("{}\u{1f}{}", series.key, point.measure),
                Shape::Marker {
                    cx,
                    cy,
                    color: config.measure_color(&point.measure, axis_idx),
                    hover: HoverData {
                        series: series.name.clone(),
                        label: point.label.clone(),
                        value: point.value,
                        missing: point.missing,
                    },
                },
            ));
        }
    }

    let legend = dataset
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            Node::new(
                series.key.clone(),
                Shape::LegendItem {
                    color: series_color(i).to_string(),
                    label: series.name.clone(),
                },
            )
        })
        .collect();

    Scene {
        width: layout.width,
        height: layout.height,
        chart_translate: layout.center,
        legend_visible: config.show_legend,
        legend_position: config.legend_position,
        grid,
        axes,
        labels,
        polygons,
        markers,
        legend,
    }
}
