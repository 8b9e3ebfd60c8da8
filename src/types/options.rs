//! Configuration option descriptors.
//!
//! The host renders its own settings panel from these shapes; we only
//! declare them. The Style section is regenerated on every update to match
//! the current measure set (see `config::derive_style_options`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Recognized option kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Boolean,
    Integer,
    Text,
    Color,
    RadioButtons,
}

/// A single configuration option the host offers the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigElement {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub label: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_as: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Choice lists for radio buttons, as the host expects them:
    /// one `{display label: value}` map per choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<BTreeMap<String, String>>>,
}

impl ConfigElement {
    fn new(kind: ElementKind, id: &str, label: &str) -> Self {
        Self {
            kind,
            label: label.to_string(),
            id: id.to_string(),
            default: None,
            min: None,
            max: None,
            display_as: None,
            display_size: None,
            placeholder: None,
            options: None,
        }
    }

    /// A boolean toggle.
    #[must_use]
    pub fn boolean(id: &str, label: &str, default: bool) -> Self {
        let mut el = Self::new(ElementKind::Boolean, id, label);
        el.default = Some(serde_json::Value::Bool(default));
        el
    }

    /// A bounded integer rendered as a range slider.
    #[must_use]
    pub fn integer_range(id: &str, label: &str, default: i64, min: i64, max: i64) -> Self {
        let mut el = Self::new(ElementKind::Integer, id, label);
        el.default = Some(serde_json::Value::from(default));
        el.min = Some(min);
        el.max = Some(max);
        el.display_as = Some("range".to_string());
        el
    }

    /// A free-text input with a placeholder.
    #[must_use]
    pub fn text(id: &str, label: &str, default: &str) -> Self {
        let mut el = Self::new(ElementKind::Text, id, label);
        el.default = Some(serde_json::Value::String(default.to_string()));
        el.placeholder = Some(default.to_string());
        el
    }

    /// A color picker.
    #[must_use]
    pub fn color(id: &str, label: &str, default: &str) -> Self {
        let mut el = Self::new(ElementKind::Color, id, label);
        el.default = Some(serde_json::Value::String(default.to_string()));
        el
    }

    /// A single-choice radio group. `choices` pairs display labels with
    /// stored values.
    #[must_use]
    pub fn radio_buttons(id: &str, label: &str, default: &str, choices: &[(&str, &str)]) -> Self {
        let mut el = Self::new(ElementKind::RadioButtons, id, label);
        el.default = Some(serde_json::Value::String(default.to_string()));
        el.display_size = Some("half".to_string());
        el.options = Some(
            choices
                .iter()
                .map(|(display, value)| {
                    let mut choice = BTreeMap::new();
                    choice.insert((*display).to_string(), (*value).to_string());
                    choice
                })
                .collect(),
        );
        el
    }
}

/// Section marker; the host only recognizes `"section"` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    #[default]
    Section,
}

/// A tab in the host settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSection {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    pub elements: Vec<ConfigElement>,
}

impl ConfigSection {
    #[must_use]
    pub fn new(label: &str, elements: Vec<ConfigElement>) -> Self {
        Self {
            kind: SectionKind::Section,
            label: label.to_string(),
            default: None,
            elements,
        }
    }
}

/// The full registration descriptor: Style, Legend, and Axis tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginOptions {
    pub style_tab: ConfigSection,
    pub legend_tab: ConfigSection,
    pub axis_tab: ConfigSection,
}
