//! Field descriptors from the host query metadata.

use serde::{Deserialize, Serialize};

/// A dimension- or measure-like field definition.
///
/// Immutable per render pass; the host supplies a fresh schema with every
/// update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Stable field name, used as the key into result rows and into the
    /// per-measure configuration ids.
    pub name: String,
    /// Human label.
    pub label: String,
    /// Optional short label, preferred for display when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_short: Option<String>,
}

impl Field {
    /// Display label: the short label when present, the long label otherwise.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self.label_short.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => &self.label,
        }
    }
}

/// Ordered field lists from the host query response.
///
/// Axis order is measure field order; the invariant that the number of
/// angular axes equals the number of measures falls out of this list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuerySchema {
    #[serde(default)]
    pub dimension_like: Vec<Field>,
    #[serde(default)]
    pub measure_like: Vec<Field>,
}

impl QuerySchema {
    /// The dimension the chart is keyed on (the first dimension-like field).
    #[must_use]
    pub fn dimension(&self) -> Option<&Field> {
        self.dimension_like.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_preferred() {
        let f = Field {
            name: "orders.count".to_string(),
            label: "Orders Count".to_string(),
            label_short: Some("Count".to_string()),
        };
        assert_eq!(f.display_label(), "Count");
    }

    #[test]
    fn empty_short_label_falls_back() {
        let f = Field {
            name: "orders.count".to_string(),
            label: "Orders Count".to_string(),
            label_short: Some(String::new()),
        };
        assert_eq!(f.display_label(), "Orders Count");
    }
}
