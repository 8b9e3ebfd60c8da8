//! Radial scale and angular axis placement.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Angular slice per axis: `2π / num_axes`.
#[must_use]
pub fn angle_slice(num_axes: usize) -> f64 {
    if num_axes == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = num_axes as f64;
    TAU / n
}

/// Angle of axis `i`: `i * slice − π/2`, so axis 0 points straight up and
/// subsequent axes proceed clockwise.
#[must_use]
pub fn axis_angle(i: usize, num_axes: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let i = i as f64;
    i * angle_slice(num_axes) - FRAC_PI_2
}

/// Linear map from `[0, max]` onto `[0, radius]`.
///
/// Negative values map to negative radii (documented limitation). A maximum
/// of 0 is the degenerate scale: every value maps to 0 while the chart frame
/// keeps its geometric radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialScale {
    max: f64,
    radius: f64,
}

impl RadialScale {
    #[must_use]
    pub fn new(max: f64, radius: f64) -> Self {
        Self { max, radius }
    }

    /// Pixel radius for a data value.
    #[must_use]
    pub fn radius_of(&self, value: f64) -> f64 {
        if self.max == 0.0 {
            return 0.0;
        }
        value / self.max * self.radius
    }

    /// Pixel radius of the domain maximum (the axis line length).
    #[must_use]
    pub fn full(&self) -> f64 {
        self.radius_of(self.max)
    }
}
