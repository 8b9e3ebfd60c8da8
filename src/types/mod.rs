//! Serde data model for everything the host hands us: query metadata,
//! result rows, and the configuration option descriptors the host renders
//! its settings panel from.

pub mod field;
pub mod options;
pub mod row;

pub use field::{Field, QuerySchema};
pub use options::{ConfigElement, ConfigSection, ElementKind, PluginOptions};
pub use row::{Cell, Row};
