//! Structured error types for radarviz.
//!
//! The update path never aborts on bad data: schema problems degrade to an
//! empty chart and configuration problems clamp to defaults. Errors that do
//! surface (setup failures, undecodable host payloads) cross the JS boundary
//! as `JsValue`.

/// All errors that can occur while configuring or rendering a chart.
#[derive(Debug, thiserror::Error)]
pub enum VizError {
    /// Query schema unusable: no dimension field or no measure fields.
    #[error("Schema mismatch: {0}")]
    Schema(String),

    /// Configuration value out of range or unrecognized.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Drawing surface acquisition or mutation failure.
    #[error("Render error: {0}")]
    Render(String),

    /// Host payload could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VizError>;

impl From<String> for VizError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for VizError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<VizError> for wasm_bindgen::JsValue {
    fn from(e: VizError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
