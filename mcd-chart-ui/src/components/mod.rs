mod bar_view;
mod chart_panel;
mod parallel_view;
mod scatter_view;
mod stream_view;

pub use bar_view::BarView;
pub use chart_panel::ChartPanel;
pub use parallel_view::ParallelView;
pub use scatter_view::ScatterView;
pub use stream_view::StreamView;
