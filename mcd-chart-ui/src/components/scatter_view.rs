//! Top artists: popularity vs. average track popularity.

use crate::browser;
use crate::responsive::responsive_chart;
use dioxus::prelude::*;
use mcd_catalog::RawRecord;
use mcd_chart::charts::ScatterChart;
use mcd_chart::DashboardConfig;
use mcd_data::scatter;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[component]
pub fn ScatterView(config: DashboardConfig) -> Element {
    let threshold = config.popularity_threshold;
    let seed = config.jitter_seed;
    responsive_chart(
        config.data_path.clone(),
        config.debounce_ms,
        move || {
            let seed = seed.unwrap_or_else(browser::random_seed);
            ScatterChart::new(StdRng::seed_from_u64(seed))
        },
        move |records: &[RawRecord]| scatter::prepare(records, threshold),
    )
}
