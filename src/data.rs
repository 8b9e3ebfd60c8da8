//! Series extraction: query rows plus schema plus configuration become
//! the derived entries the chart plots.

use crate::config::ChartConfig;
use crate::error::{Result, VizError};
use crate::types::{Cell, QuerySchema, Row};

/// One vertex of a series polygon: a measure's value on its axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisPoint {
    /// Axis display label (configured override or field label).
    pub label: String,
    /// Plotted value. Missing or non-numeric cells resolve to 0.
    pub value: f64,
    /// Distinguishes a genuine 0 from an absent cell.
    pub missing: bool,
    /// Measure field name backing this axis.
    pub measure: String,
}

/// One polygon: a dimension value with one axis point per measure, in
/// measure field order.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub name: String,
    /// Reconciliation key; equals `name` unless a duplicate dimension value
    /// forced an index suffix.
    pub key: String,
    pub axes: Vec<AxisPoint>,
}

/// Everything derived from one update's rows.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub series: Vec<SeriesEntry>,
    /// Global maximum across all rows and measures; 0 for empty data
    /// (degenerate scale). Negative-only data keeps its negative maximum,
    /// an accepted limitation: radii invert visually.
    pub max_value: f64,
}

/// Build the plotted series from host rows.
///
/// Fails only on an unusable schema (no dimension, no measures); everything
/// else degrades per cell.
pub fn extract(rows: &[Row], schema: &QuerySchema, config: &ChartConfig) -> Result<Dataset> {
    let dimension = schema
        .dimension()
        .ok_or_else(|| VizError::Schema("no dimension-like field".to_string()))?;
    if schema.measure_like.is_empty() {
        return Err(VizError::Schema("no measure-like fields".to_string()));
    }

    let mut series = Vec::with_capacity(rows.len());
    let mut max_value = f64::NEG_INFINITY;
    let mut seen_names: std::collections::HashMap<String, usize> = std::collections::HashMap::new();

    for row in rows {
        let name = row
            .get(&dimension.name)
            .map(Cell::display)
            .unwrap_or_default();

        // Stable identity for reconciliation; duplicate dimension values get
        // an index suffix so keys stay unique.
        let occurrence = seen_names.entry(name.clone()).or_insert(0);
        let key = if *occurrence == 0 {
            name.clone()
        } else {
            format!("{name}#{occurrence}")
        };
        *occurrence += 1;

        let mut axes = Vec::with_capacity(schema.measure_like.len());
        for measure in &schema.measure_like {
            let number = row.get(&measure.name).and_then(Cell::as_number);
            let value = number.unwrap_or(0.0);
            if let Some(v) = number {
                max_value = max_value.max(v);
            }
            axes.push(AxisPoint {
                label: config.measure_label(measure).to_string(),
                value,
                missing: number.is_none(),
                measure: measure.name.clone(),
            });
        }

        series.push(SeriesEntry { name, key, axes });
    }

    if !max_value.is_finite() {
        max_value = 0.0;
    }

    Ok(Dataset { series, max_value })
}
