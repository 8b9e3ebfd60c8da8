//! Retained rendering seam.
//!
//! A [`Surface`] owns keyed visual elements grouped into layers and applies
//! the three-way merge the scene demands: enter (create with full initial
//! styling), update (touch only attributes that can change), exit (remove).
//! Two implementations exist: the SVG DOM surface used in the browser and an
//! in-memory surface used by native builds and the test suite.

pub mod memory;

#[cfg(target_arch = "wasm32")]
pub mod svg;
#[cfg(target_arch = "wasm32")]
pub mod tooltip;

pub use memory::MemorySurface;
#[cfg(target_arch = "wasm32")]
pub use svg::SvgSurface;

use crate::error::Result;
use crate::layout::{legend_offsets, LEGEND_BOTTOM_ADVANCE};
use crate::scene::{Node, Scene};

/// The element groups a surface maintains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Grid,
    Axes,
    Labels,
    Polygons,
    Markers,
    Legend,
}

/// A retained, keyed drawing surface.
pub trait Surface {
    /// Reconcile one layer against `nodes`, keyed by [`Node::key`]:
    /// newly-appearing keys create elements, persisting keys update in
    /// place (preserving attached interaction state), absent keys remove
    /// their elements.
    fn sync_layer(&mut self, layer: Layer, nodes: &[Node]) -> Result<()>;

    /// Translate the chart group to the container midpoint.
    fn set_chart_transform(&mut self, x: f64, y: f64) -> Result<()>;

    /// Show or hide the legend group. Hiding never removes elements.
    fn set_legend_visible(&mut self, visible: bool) -> Result<()>;

    /// Rendered width of one legend row, when the surface can measure it.
    fn legend_item_width(&self) -> Option<f64>;

    /// Apply container-space offsets to legend rows by key.
    fn place_legend(&mut self, offsets: &[(String, (f64, f64))]) -> Result<()>;
}

/// Apply a scene to a surface.
///
/// Legend rows are synced before they are placed: bottom positioning centers
/// on the rendered row width, which only exists once the rows do. When the
/// legend is hidden its elements are left untouched behind the hidden group;
/// the next visible pass reconciles them as usual.
pub fn render<S: Surface + ?Sized>(scene: &Scene, surface: &mut S) -> Result<()> {
    let (cx, cy) = scene.chart_translate;
    surface.set_chart_transform(cx, cy)?;

    surface.sync_layer(Layer::Grid, &scene.grid)?;
    surface.sync_layer(Layer::Axes, &scene.axes)?;
    surface.sync_layer(Layer::Labels, &scene.labels)?;
    surface.sync_layer(Layer::Polygons, &scene.polygons)?;
    surface.sync_layer(Layer::Markers, &scene.markers)?;

    surface.set_legend_visible(scene.legend_visible)?;
    if scene.legend_visible {
        surface.sync_layer(Layer::Legend, &scene.legend)?;
        let item_width = surface.legend_item_width().unwrap_or(LEGEND_BOTTOM_ADVANCE);
        let offsets = legend_offsets(
            scene.legend_position,
            scene.width,
            scene.height,
            scene.legend.len(),
            item_width,
        );
        let keyed: Vec<(String, (f64, f64))> = scene
            .legend
            .iter()
            .map(|node| node.key.clone())
            .zip(offsets)
            .collect();
        surface.place_legend(&keyed)?;
    }

    Ok(())
}
