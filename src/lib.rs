//! Scatter layout generator for the gallery front-end.
//!
//! Places `count` square tiles inside a viewport so they keep clear of each
//! other and of a reserved central panel, degrading through a fixed chain of
//! fallback strategies when the viewport gets crowded. Modules follow the
//! orchestrator pattern: each `mod.rs` re-exports the public surface while
//! the details stay private.

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod sequence;

pub use config::{LayoutConfig, Margins, SizeRange, ViewportConfig};
pub use error::{LayoutError, Result};
pub use geometry::{Bounds, Placement, Rect, Size, overlaps};
pub use layout::{LayoutReport, PlacementSet, ScatterLayout, Tier, generate_placements, place_items};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use sequence::{JitterMode, JitterSource, halton};
