//! radarviz - radar ("spider") chart visualization for BI dashboards
//!
//! Renders one categorical dimension against multiple measures as polygons
//! on shared radial axes, inside a host-provided DOM container, via
//! WebAssembly and SVG:
//! - Keyed enter/update/exit reconciliation (no teardown/rebuild flicker)
//! - Host-driven configuration with per-measure labels and colors
//! - Container-scoped tooltip, positionable legend, configurable grid
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { RadarChart, plugin_options } from 'radarviz';
//! await init();
//! const chart = new RadarChart(container);
//! chart.setOptionsCallback((styleOptions) => host.refreshSettings(styleOptions));
//! chart.update(rows, config, queryResponse.fields, () => host.renderComplete());
//! ```

// Data model and derivation
pub mod config;
pub mod data;
pub mod error;
pub mod types;

// Geometry and rendering
pub mod layout;
pub mod render;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod viewer;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::RadarChart;

pub use error::{Result, VizError};

/// The registration descriptor the host builds its settings UI from:
/// Style/Legend/Axis sections with option kinds and defaults.
///
/// # Errors
/// Returns an error if the descriptor cannot be serialized.
#[wasm_bindgen]
pub fn plugin_options() -> std::result::Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&config::default_plugin_options())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
