//! Static rendering of single charts.
//!
//! Each chart goes through the same trigger path as in the browser: data
//! arrives, the container size settles, the chart redraws once.

use crate::ChartKind;
use anyhow::Context;
use log::{error, info};
use mcd_catalog::{read_records, RawRecord};
use mcd_chart::charts::{BarChart, ParallelChart, ScatterChart, StreamChart};
use mcd_chart::{Chart, DashboardConfig, SvgChartHost, Viewport};
use mcd_data::{bar, parallel, scatter, stream};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

/// Load the catalog for one chart. A failure is logged and leaves that chart
/// blank.
pub fn load_records(path: &str, chart: &str) -> Option<Vec<RawRecord>> {
    match read_records(path) {
        Ok(records) => Some(records),
        Err(e) => {
            error!("{}: failed to load {}: {}", chart, path, e);
            None
        }
    }
}

fn draw<C: Chart>(chart: C, data: Option<C::Data>, size: Viewport, delay_ms: u64) -> String {
    let mut host = SvgChartHost::new(chart, delay_ms);
    if let Some(data) = data {
        host.data_loaded(data);
    }
    host.resized(size, 0.0);
    host.tick(delay_ms as f64);
    if host.markup().is_empty() {
        host.canvas().to_svg(size)
    } else {
        host.markup().to_string()
    }
}

/// Run one pipeline over `records` and render it at `size`.
///
/// `None` records (a failed load) and empty pipeline output both produce an
/// empty `<svg>` of the requested size.
pub fn chart_svg(
    kind: ChartKind,
    records: Option<&[RawRecord]>,
    config: &DashboardConfig,
    size: Viewport,
) -> String {
    let delay = config.debounce_ms;
    match kind {
        ChartKind::Bar => {
            let data = records.map(|r| bar::prepare(r, &config.bin_spec()));
            draw(BarChart, data, size, delay)
        }
        ChartKind::Scatter => {
            let seed = config.jitter_seed.unwrap_or_else(rand::random);
            let chart = ScatterChart::new(StdRng::seed_from_u64(seed));
            let data = records.map(|r| scatter::prepare(r, config.popularity_threshold));
            draw(chart, data, size, delay)
        }
        ChartKind::Parallel => {
            let data = records.map(|r| parallel::prepare(r, config.popularity_threshold));
            draw(ParallelChart, data, size, delay)
        }
        ChartKind::Stream => {
            let data = records.map(|r| stream::prepare(r, &config.stream));
            draw(StreamChart, data, size, delay)
        }
    }
}

pub fn run_chart(kind: ChartKind, config: &DashboardConfig, out: &Path) -> anyhow::Result<()> {
    let label = format!("{:?}", kind).to_lowercase();
    let records = load_records(&config.data_path, &label);
    let svg = chart_svg(kind, records.as_deref(), config, config.viewport());
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;
    info!("chart: wrote {} chart to {}", label, out.display());
    Ok(())
}
