//! Dashboard page: bar chart across the top, scatter and parallel
//! coordinates side by side underneath.

use crate::render::{chart_svg, load_records};
use crate::ChartKind;
use anyhow::Context;
use log::info;
use mcd_chart::{DashboardConfig, Viewport};
use std::path::Path;

const TITLE: &str = "Music Catalog Artist Dashboard";

/// Build the page. Each chart loads the data file on its own.
pub fn dashboard_html(config: &DashboardConfig) -> String {
    let top = Viewport::new(config.width, config.height / 2.0);
    let bottom = Viewport::new(config.width / 2.0, config.height / 2.0);

    let cell = |kind: ChartKind, size: Viewport| {
        let label = format!("{:?}", kind).to_lowercase();
        let records = load_records(&config.data_path, &label);
        chart_svg(kind, records.as_deref(), config, size)
    };
    let bar = cell(ChartKind::Bar, top);
    let scatter = cell(ChartKind::Scatter, bottom);
    let parallel = cell(ChartKind::Parallel, bottom);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
  body {{ margin: 0; font-family: system-ui, -apple-system, sans-serif; }}
  .dashboard {{ display: grid; grid-template-columns: {half_w}px {half_w}px; grid-template-rows: {half_h}px {half_h}px; }}
  .chart-container {{ overflow: hidden; }}
  .chart-container.wide {{ grid-column: 1 / span 2; }}
</style>
</head>
<body>
<div class="dashboard">
<div class="chart-container wide">
{bar}</div>
<div class="chart-container">
{scatter}</div>
<div class="chart-container">
{parallel}</div>
</div>
</body>
</html>
"#,
        title = TITLE,
        half_w = bottom.width,
        half_h = bottom.height,
        bar = bar,
        scatter = scatter,
        parallel = parallel,
    )
}

pub fn run_render(config: &DashboardConfig, out: &Path) -> anyhow::Result<()> {
    let html = dashboard_html(config);
    std::fs::write(out, html).with_context(|| format!("writing {}", out.display()))?;
    info!("render: wrote dashboard to {}", out.display());
    Ok(())
}
