mod plot_model;
mod plot_surface;
mod plot_view;
mod plugin_dispatch;
mod plugin_registry;
mod series_selection;

pub use plot_model::PlotModel;
pub use plot_surface::{PlotSurface, PlotSurfaceConfig};
pub use plot_view::PlotView;
