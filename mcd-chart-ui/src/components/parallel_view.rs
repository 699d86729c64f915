use crate::responsive::responsive_chart;
use dioxus::prelude::*;
use mcd_catalog::RawRecord;
use mcd_chart::charts::ParallelChart;
use mcd_chart::DashboardConfig;
use mcd_data::parallel;

/// Parallel coordinates over the six per-artist metrics.
#[component]
pub fn ParallelView(config: DashboardConfig) -> Element {
    let threshold = config.popularity_threshold;
    responsive_chart(
        config.data_path.clone(),
        config.debounce_ms,
        || ParallelChart,
        move |records: &[RawRecord]| parallel::prepare(records, threshold),
    )
}
