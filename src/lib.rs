//! chart-tracker: touch-drag tracker for plotted series.
//!
//! A finger dragged across a plot reveals a tracker (highlighted point plus a
//! vertical reference line) that follows the nearest series. The crate splits
//! into:
//!
//! - `core`: data/screen geometry, windowed search and per-series hit-testing
//! - `interaction`: the gesture state machine driving the tracker
//! - `api`: the plot model, series selection and the touch surface facade
//! - `render`: backend-agnostic overlay frames
//! - `extensions`: tracker observers

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotModel, PlotSurface, PlotSurfaceConfig, PlotView};
pub use error::{TrackerError, TrackerResult};
pub use interaction::{TrackerManipulator, TrackerManipulatorConfig};
