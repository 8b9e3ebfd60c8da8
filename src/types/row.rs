//! Result rows from the host query engine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One result row, keyed by field name.
pub type Row = HashMap<String, Cell>;

/// A single result cell. The host guarantees at least a `value` member;
/// anything else it attaches (rendered text, links) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cell {
    #[serde(default)]
    pub value: serde_json::Value,
}

impl Cell {
    /// Numeric view of the cell. Numbers pass through, finite numeric
    /// strings are parsed, everything else is absent.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match &self.value {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => {
                s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
            }
            _ => None,
        }
    }

    /// Display form of the cell, used for dimension values.
    #[must_use]
    pub fn display(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        let cell = Cell { value: json!(12.5) };
        assert_eq!(cell.as_number(), Some(12.5));
    }

    #[test]
    fn numeric_strings_parse() {
        let cell = Cell { value: json!(" 42 ") };
        assert_eq!(cell.as_number(), Some(42.0));
    }

    #[test]
    fn non_numeric_is_absent() {
        assert_eq!(Cell { value: json!("n/a") }.as_number(), None);
        assert_eq!(Cell { value: json!(null) }.as_number(), None);
        assert_eq!(Cell { value: json!(true) }.as_number(), None);
        assert_eq!(Cell { value: json!("inf") }.as_number(), None);
    }

    #[test]
    fn display_strips_string_quotes() {
        assert_eq!(Cell { value: json!("Q1") }.display(), "Q1");
        assert_eq!(Cell { value: json!(7) }.display(), "7");
        assert_eq!(Cell { value: json!(null) }.display(), "");
    }
}
