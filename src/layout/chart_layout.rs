//! Per-update chart layout: container measurement turned into radius,
//! center, vertex and label placement, and legend offsets.

use crate::config::LegendPosition;
use crate::data::AxisPoint;

use super::radial::{axis_angle, RadialScale};

/// Fixed margin on each side of the chart area.
pub const MARGIN: f64 = 40.0;

/// Radial distance of axis labels past the axis endpoint.
const AXIS_LABEL_OFFSET: f64 = 20.0;

/// Legend swatch edge length.
pub const LEGEND_RECT_SIZE: f64 = 18.0;
/// Gap between a swatch and its label, and between stacked rows.
pub const LEGEND_SPACING: f64 = 4.0;
/// Horizontal advance per item when the legend lies along the bottom.
pub const LEGEND_BOTTOM_ADVANCE: f64 = LEGEND_RECT_SIZE + LEGEND_SPACING + 50.0;
/// Inset of the right-hand legend column from the container edge.
const LEGEND_RIGHT_INSET: f64 = 100.0;

/// Geometry derived from the container size and the current data shape.
/// Never cached across renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    /// Container midpoint; the chart group's translation.
    pub center: (f64, f64),
    /// Half the smaller usable extent after margins.
    pub radius: f64,
    pub num_axes: usize,
    pub scale: RadialScale,
}

impl ChartLayout {
    /// Compute the layout for the current container size and dataset.
    #[must_use]
    pub fn compute(width: f64, height: f64, num_axes: usize, max_value: f64) -> Self {
        let chart_width = (width - MARGIN * 2.0).max(0.0);
        let chart_height = (height - MARGIN * 2.0).max(0.0);
        let radius = chart_width.min(chart_height) / 2.0;
        Self {
            width,
            height,
            center: (width / 2.0, height / 2.0),
            radius,
            num_axes,
            scale: RadialScale::new(max_value, radius),
        }
    }

    /// Chart-local coordinates of a value on axis `i`.
    #[must_use]
    pub fn vertex(&self, i: usize, value: f64) -> (f64, f64) {
        let angle = axis_angle(i, self.num_axes);
        let r = self.scale.radius_of(value);
        (r * angle.cos(), r * angle.sin())
    }

    /// Endpoint of axis line `i` (at the domain maximum).
    #[must_use]
    pub fn axis_endpoint(&self, i: usize) -> (f64, f64) {
        let angle = axis_angle(i, self.num_axes);
        let r = self.scale.full();
        (r * angle.cos(), r * angle.sin())
    }

    /// Anchor of axis label `i`, slightly past the axis endpoint.
    #[must_use]
    pub fn label_anchor(&self, i: usize) -> (f64, f64) {
        let angle = axis_angle(i, self.num_axes);
        let r = self.scale.full() + AXIS_LABEL_OFFSET;
        (r * angle.cos(), r * angle.sin())
    }

    /// Radius of grid circle `level` (1-based) out of `interval` circles.
    #[must_use]
    pub fn grid_radius(&self, level: u32, interval: u32) -> f64 {
        if interval == 0 {
            return 0.0;
        }
        f64::from(level) * self.radius / f64::from(interval)
    }

    /// Closed polygon path through a series' axis points, in axis order.
    #[must_use]
    pub fn polygon_path(&self, axes: &[AxisPoint]) -> String {
        let mut path = String::new();
        for (i, point) in axes.iter().enumerate() {
            let (x, y) = self.vertex(i, point.value);
            let op = if i == 0 { 'M' } else { 'L' };
            path.push_str(&format!("{op}{x:.3},{y:.3}"));
        }
        if !path.is_empty() {
            path.push('Z');
        }
        path
    }
}

/// Container-space offsets for each legend item.
///
/// Right and left stack vertically inside the top margin; bottom stacks
/// horizontally above the bottom margin, centered on `item_width`: the
/// rendered width of a legend row when the caller can measure it, or
/// [`LEGEND_BOTTOM_ADVANCE`] as the estimate.
#[must_use]
pub fn legend_offsets(
    position: LegendPosition,
    width: f64,
    height: f64,
    num_items: usize,
    item_width: f64,
) -> Vec<(f64, f64)> {
    let row_advance = LEGEND_RECT_SIZE + LEGEND_SPACING;
    #[allow(clippy::cast_precision_loss)]
    let n = num_items as f64;
    (0..num_items)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let i = i as f64;
            match position {
                LegendPosition::Right => (width - MARGIN - LEGEND_RIGHT_INSET, MARGIN + i * row_advance),
                LegendPosition::Left => (MARGIN, MARGIN + i * row_advance),
                LegendPosition::Bottom => (
                    (width - item_width) / 2.0 + i * LEGEND_BOTTOM_ADVANCE,
                    height - MARGIN - n * row_advance,
                ),
            }
        })
        .collect()
}
