//! Observer hooks for hosts that react to tracker changes.

mod plugins;

pub use plugins::{TrackerEvent, TrackerPlugin, TrackerPluginContext};
