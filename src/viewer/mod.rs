//! Main `RadarChart` struct - the wasm-exported entry point the host BI
//! platform drives.
//!
//! Lifecycle contract:
//! - `new(container)` once per mount: acquires the SVG surface and tooltip.
//! - `update(rows, config, schema, done)` on every data or configuration
//!   change: recomputes scales and geometry from scratch, reconciles the
//!   retained visual elements, and invokes `done` exactly once.
//! - `destroy()` removes everything the chart put into the container.
//!
//! Updates are fully synchronous, so the completion callback has fired
//! before control returns to the host and calls can never overlap.

use wasm_bindgen::prelude::*;

use js_sys::Function;
use web_sys::HtmlElement;

use crate::config::{derive_style_options, ChartConfig};
use crate::data;
use crate::error::{Result, VizError};
use crate::layout::ChartLayout;
use crate::render::{render, SvgSurface};
use crate::scene::{self, Scene};
use crate::types::{QuerySchema, Row};

/// The radar chart renderer exported to JavaScript.
#[wasm_bindgen]
pub struct RadarChart {
    container: HtmlElement,
    surface: SvgSurface,
    options_callback: Option<Function>,
}

#[wasm_bindgen]
impl RadarChart {
    /// Create a chart scoped to `container`.
    ///
    /// # Errors
    /// Returns an error if the drawing surface cannot be acquired (no
    /// document, element creation failure).
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement) -> std::result::Result<RadarChart, JsValue> {
        console_error_panic_hook::set_once();

        let surface = SvgSurface::mount(&container).map_err(JsValue::from)?;
        Ok(RadarChart {
            container,
            surface,
            options_callback: None,
        })
    }

    /// Register the host-side configuration notification hook. It receives
    /// the regenerated per-measure Style option list on every update so the
    /// host can re-render its settings panel.
    #[wasm_bindgen(js_name = "setOptionsCallback")]
    pub fn set_options_callback(&mut self, callback: Function) {
        self.options_callback = Some(callback);
    }

    /// Render the latest data and configuration.
    ///
    /// `rows` is an ordered sequence of records keyed by field name (each
    /// cell exposing at least a `value`), `config` the host's flat
    /// configuration object, `schema` the ordered dimension/measure field
    /// lists. `done` is invoked exactly once after all visual mutations,
    /// including the degraded paths.
    ///
    /// # Errors
    /// Returns an error if a host payload cannot be decoded or a DOM
    /// mutation fails; `done` has already fired by then.
    pub fn update(
        &mut self,
        rows: JsValue,
        config: JsValue,
        schema: JsValue,
        done: Function,
    ) -> std::result::Result<(), JsValue> {
        let result = self.update_pass(rows, config, schema);
        let _ = done.call0(&JsValue::NULL);
        result.map_err(JsValue::from)
    }

    /// Remove the svg and tooltip from the container.
    pub fn destroy(&mut self) {
        self.surface.unmount();
    }
}

impl RadarChart {
    fn update_pass(&mut self, rows: JsValue, config: JsValue, schema: JsValue) -> Result<()> {
        let schema: QuerySchema = decode("schema", schema)?;
        let rows: Vec<Row> = decode("rows", rows)?;
        let raw_config: serde_json::Value = decode("config", config)?;

        // Regenerate the per-measure options and notify the host before any
        // per-measure value is read, so defaults and placeholders are
        // consistent within this pass.
        let style_options = derive_style_options(&schema.measure_like);
        if let Some(callback) = &self.options_callback {
            let payload = serde_wasm_bindgen::to_value(&style_options)
                .map_err(|e| VizError::Decode(e.to_string()))?;
            let _ = callback.call1(&JsValue::NULL, &payload);
        }

        let config = ChartConfig::from_value(&raw_config);
        let (width, height) = self.container_size();

        let scene = match data::extract(&rows, &schema, &config) {
            Ok(dataset) => {
                let layout = ChartLayout::compute(
                    width,
                    height,
                    schema.measure_like.len(),
                    dataset.max_value,
                );
                scene::build(&schema.measure_like, &dataset, &config, &layout)
            }
            // Unusable schema degrades to an empty chart; the host still
            // gets its completion signal.
            Err(VizError::Schema(_)) => Scene::empty(width, height),
            Err(e) => return Err(e),
        };

        render(&scene, &mut self.surface)
    }

    /// Current container pixel size. Measured on every update - the svg is
    /// percentage-sized, so cached dimensions would go stale on resize.
    fn container_size(&self) -> (f64, f64) {
        (
            f64::from(self.container.offset_width()),
            f64::from(self.container.offset_height()),
        )
    }
}

fn decode<T: serde::de::DeserializeOwned>(what: &str, value: JsValue) -> Result<T> {
    serde_wasm_bindgen::from_value(value).map_err(|e| VizError::Decode(format!("{what}: {e}")))
}
