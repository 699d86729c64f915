//! Popularity distribution across all artists.

use crate::responsive::responsive_chart;
use dioxus::prelude::*;
use mcd_catalog::RawRecord;
use mcd_chart::charts::BarChart;
use mcd_chart::DashboardConfig;
use mcd_data::bar;

#[component]
pub fn BarView(config: DashboardConfig) -> Element {
    let bins = config.bin_spec();
    responsive_chart(
        config.data_path.clone(),
        config.debounce_ms,
        || BarChart,
        move |records: &[RawRecord]| bar::prepare(records, &bins),
    )
}
