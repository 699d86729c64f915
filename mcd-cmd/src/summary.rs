//! Aggregated pipeline output as JSON.

use crate::ChartKind;
use anyhow::Context;
use mcd_catalog::{read_records, RawRecord};
use mcd_chart::DashboardConfig;
use mcd_data::{bar, parallel, scatter, stream};

pub fn summarize(
    kind: ChartKind,
    records: &[RawRecord],
    config: &DashboardConfig,
) -> anyhow::Result<String> {
    let json = match kind {
        ChartKind::Bar => serde_json::to_string_pretty(&bar::prepare(records, &config.bin_spec()))?,
        ChartKind::Scatter => serde_json::to_string_pretty(&scatter::prepare(
            records,
            config.popularity_threshold,
        ))?,
        ChartKind::Parallel => serde_json::to_string_pretty(&parallel::prepare(
            records,
            config.popularity_threshold,
        ))?,
        ChartKind::Stream => {
            serde_json::to_string_pretty(&stream::prepare(records, &config.stream))?
        }
    };
    Ok(json)
}

/// Load `config.data_path` and summarize it. Unlike rendering, a failed load
/// is an error here.
pub fn summary_json(kind: ChartKind, config: &DashboardConfig) -> anyhow::Result<String> {
    let records = read_records(&config.data_path)
        .with_context(|| format!("reading catalog {}", config.data_path))?;
    summarize(kind, &records, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_summary_lists_every_bucket() {
        let records = vec![
            RawRecord::new("A", 0.0, 1.0),
            RawRecord::new("B", 100.0, 1.0),
        ];
        let json = summarize(ChartKind::Bar, &records, &DashboardConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let buckets = value.as_array().unwrap();
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0]["label"], "0-10");
        assert_eq!(buckets[0]["count"], 1);
        assert_eq!(buckets[9]["count"], 1);
    }

    #[test]
    fn parallel_summary_applies_the_threshold() {
        let records = vec![
            RawRecord::new("A", 79.0, 1.0),
            RawRecord::new("B", 80.0, 1.0),
        ];
        let json = summarize(ChartKind::Parallel, &records, &DashboardConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(1));
        assert_eq!(value[0]["artist"], "B");
    }
}
