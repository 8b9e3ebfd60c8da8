//! In-memory surface for native builds and the test suite.
//!
//! Stores the same keyed elements the SVG surface would create and counts
//! enter/update/exit operations so tests can assert reconciliation behavior
//! (idempotence, stale-key removal) without a DOM.

use std::collections::HashMap;

use crate::error::Result;
use crate::scene::{Node, Shape};

use super::{Layer, Surface};

/// One retained element.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredNode {
    pub shape: Shape,
    /// Container-space legend offset, once placed.
    pub offset: Option<(f64, f64)>,
}

/// Reconciliation operation counters, reset per pass via [`MemorySurface::take_stats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncStats {
    pub created: usize,
    pub updated: usize,
    pub removed: usize,
}

/// A `Surface` that retains nodes in plain maps.
#[derive(Debug, Default)]
pub struct MemorySurface {
    layers: HashMap<Layer, Vec<(String, StoredNode)>>,
    pub chart_transform: (f64, f64),
    pub legend_visible: bool,
    stats: SyncStats,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element count in a layer.
    #[must_use]
    pub fn node_count(&self, layer: Layer) -> usize {
        self.layers.get(&layer).map_or(0, Vec::len)
    }

    /// Keys currently retained in a layer, in insertion order.
    #[must_use]
    pub fn keys(&self, layer: Layer) -> Vec<String> {
        self.layers
            .get(&layer)
            .map(|nodes| nodes.iter().map(|(key, _)| key.clone()).collect())
            .unwrap_or_default()
    }

    /// Look up a retained element.
    #[must_use]
    pub fn get(&self, layer: Layer, key: &str) -> Option<&StoredNode> {
        self.layers
            .get(&layer)?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Counters accumulated since the last call; resets them.
    pub fn take_stats(&mut self) -> SyncStats {
        std::mem::take(&mut self.stats)
    }
}

impl Surface for MemorySurface {
    fn sync_layer(&mut self, layer: Layer, nodes: &[Node]) -> Result<()> {
        let stored = self.layers.entry(layer).or_default();

        let before = stored.len();
        stored.retain(|(key, _)| nodes.iter().any(|node| node.key == *key));
        self.stats.removed += before - stored.len();

        for node in nodes {
            match stored.iter_mut().find(|(key, _)| key == &node.key) {
                Some((_, existing)) => {
                    existing.shape = node.shape.clone();
                    self.stats.updated += 1;
                }
                None => {
                    stored.push((
                        node.key.clone(),
                        StoredNode {
                            shape: node.shape.clone(),
                            offset: None,
                        },
                    ));
                    self.stats.created += 1;
                }
            }
        }
        Ok(())
    }

    fn set_chart_transform(&mut self, x: f64, y: f64) -> Result<()> {
        self.chart_transform = (x, y);
        Ok(())
    }

    fn set_legend_visible(&mut self, visible: bool) -> Result<()> {
        self.legend_visible = visible;
        Ok(())
    }

    fn legend_item_width(&self) -> Option<f64> {
        None
    }

    fn place_legend(&mut self, offsets: &[(String, (f64, f64))]) -> Result<()> {
        if let Some(stored) = self.layers.get_mut(&Layer::Legend) {
            for (key, offset) in offsets {
                if let Some((_, node)) = stored.iter_mut().find(|(k, _)| k == key) {
                    node.offset = Some(*offset);
                }
            }
        }
        Ok(())
    }
}
