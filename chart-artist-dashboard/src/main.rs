//! Music catalog artist dashboard.
//!
//! Three independent charts over the same CSV, each fetching and aggregating
//! it on its own:
//! - top row, full width: artist popularity distribution (bar)
//! - bottom left: top-artist popularity vs. average track popularity (scatter)
//! - bottom right: six per-artist metrics (parallel coordinates)
//!
//! Every chart sizes itself to its grid cell and redraws 200 ms after the
//! cell stops resizing.

use dioxus::prelude::*;
use mcd_chart::DashboardConfig;
use mcd_chart_ui::components::{BarView, ChartPanel, ParallelView, ScatterView};

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("artist-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        let config = DashboardConfig::default();
        log::info!("dashboard: charts reading {}", config.data_path);
        config
    });

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; grid-template-rows: 1fr 1fr; gap: 8px; width: 100vw; height: 100vh; padding: 8px; box-sizing: border-box; font-family: system-ui, -apple-system, sans-serif;",

            ChartPanel {
                style: "grid-column: 1 / span 2;".to_string(),
                BarView { config: config.clone() }
            }
            ChartPanel {
                ScatterView { config: config.clone() }
            }
            ChartPanel {
                ParallelView { config: config.clone() }
            }
        }
    }
}
