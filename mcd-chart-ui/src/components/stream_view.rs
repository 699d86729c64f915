//! Streamgraph of mean track duration per year.
//!
//! Not placed in the dashboard layout; available for pages that want it.

use crate::responsive::responsive_chart;
use dioxus::prelude::*;
use mcd_catalog::RawRecord;
use mcd_chart::charts::StreamChart;
use mcd_chart::DashboardConfig;
use mcd_data::stream;

#[component]
pub fn StreamView(config: DashboardConfig) -> Element {
    let stream_config = config.stream.clone();
    responsive_chart(
        config.data_path.clone(),
        config.debounce_ms,
        || StreamChart,
        move |records: &[RawRecord]| stream::prepare(records, &stream_config),
    )
}
