//! finance-chart: scaling and scene engine for personal finance charts.
//!
//! The engine is a pure function from a [`ChartConfig`] to a [`RenderScene`]:
//! it resolves value-axis bounds, maps `(index, value)` pairs to canvas
//! pixels, classifies points against a savings goal and zero, and emits
//! gridlines, reference lines, labels, segment paths and touch hit-regions.
//! A goal-progress bar is available as an alternate mode.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, ChartMode, RenderScene, compute_scene, project_point};
pub use error::{ChartError, ChartResult};
