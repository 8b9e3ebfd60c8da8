//! Geometry: margins, radial scaling, angular axis placement, legend
//! positioning. Everything here is pure and recomputed on every update;
//! container size, data, and configuration can all change between calls.

mod chart_layout;
mod radial;

pub use chart_layout::{
    legend_offsets, ChartLayout, LEGEND_BOTTOM_ADVANCE, LEGEND_RECT_SIZE, LEGEND_SPACING, MARGIN,
};
pub use radial::{angle_slice, axis_angle, RadialScale};
