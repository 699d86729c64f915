//! Scales, SVG draw targets, chart renderers and the responsive redraw trigger.
//!
//! This crate provides:
//! - `scale` / `format` / `color`: the d3-style building blocks charts are drawn with
//! - `canvas`: the [`canvas::DrawTarget`] trait and the in-memory [`canvas::SvgCanvas`]
//! - `charts`: bar, scatter, parallel-coordinates and streamgraph renderers
//! - `trigger`: resize debouncing and the clear-and-redraw contract
//! - `host`: a responsive chart bundled with the canvas it owns
//! - `config`: dashboard settings loadable from JSON

pub mod axis;
pub mod canvas;
pub mod charts;
pub mod color;
pub mod config;
pub mod format;
pub mod host;
pub mod scale;
pub mod trigger;
pub mod viewport;

pub use canvas::{DrawTarget, Mark, SvgCanvas};
pub use charts::{Chart, Dataset};
pub use config::DashboardConfig;
pub use host::{instance_id, SvgChartHost};
pub use trigger::{Debouncer, RenderTrigger, ResponsiveChart, TriggerState};
pub use viewport::{Margin, Viewport};
