//! unitplot-rs: unit-aware multi-series plot rendering core.
//!
//! This crate parses unit strings with unicode-superscript exponents,
//! rescales heterogeneous data series into a common display unit, and emits
//! typed plot primitives for a drawing layer to consume. It performs no
//! I/O and holds no state between calls.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod units;

pub use error::{PlotError, PlotResult};
pub use render::{RenderedPlot, render_plot};
