//! Streamgraph pipeline: mean track duration per (artist, year).
//!
//! Not part of the assembled dashboard. Kept as a standalone pipeline that
//! the CLI and the `StreamView` component can still drive.

use mcd_catalog::RawRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which artists and years the streamgraph tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub artists: Vec<String>,
    pub year_min: i32,
    pub year_max: i32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        StreamConfig {
            artists: ["Taylor Swift", "Drake", "The Weeknd", "Ariana Grande"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            year_min: 2009,
            year_max: 2025,
        }
    }
}

/// One year with a mean duration per tracked artist, in `StreamData::keys` order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearWide {
    pub year: i32,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamData {
    pub keys: Vec<String>,
    /// Every year of the configured range, ascending.
    pub rows: Vec<YearWide>,
}

impl StreamData {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() || self.rows.is_empty()
    }
}

/// Build the year-wide table. Missing (artist, year) cells are `0`.
pub fn prepare(records: &[RawRecord], config: &StreamConfig) -> StreamData {
    let mut cells: BTreeMap<(usize, i32), (f64, usize)> = BTreeMap::new();
    for record in records {
        let artist = record.artist_name.trim();
        if artist.is_empty() || !record.track_duration_min.is_finite() {
            continue;
        }
        let Some(year) = record.release_year else {
            continue;
        };
        if year < config.year_min || year > config.year_max {
            continue;
        }
        let Some(slot) = config.artists.iter().position(|a| a == artist) else {
            continue;
        };
        let cell = cells.entry((slot, year)).or_insert((0.0, 0));
        cell.0 += record.track_duration_min;
        cell.1 += 1;
    }
    log::debug!("stream: {} (artist, year) cells filled", cells.len());

    let rows = (config.year_min..=config.year_max)
        .map(|year| YearWide {
            year,
            values: (0..config.artists.len())
                .map(|slot| match cells.get(&(slot, year)) {
                    Some((sum, count)) if *count > 0 => sum / *count as f64,
                    _ => 0.0,
                })
                .collect(),
        })
        .collect();

    StreamData {
        keys: config.artists.clone(),
        rows,
    }
}

/// A stacked value for one year: the band spans `y0..y1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackPoint {
    pub year: i32,
    pub y0: f64,
    pub y1: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub key: String,
    pub points: Vec<StackPoint>,
}

/// Stack layers in key order on a zero baseline.
pub fn stack(data: &StreamData) -> Vec<Layer> {
    let mut baseline = vec![0.0; data.rows.len()];
    data.keys
        .iter()
        .enumerate()
        .map(|(slot, key)| {
            let points = data
                .rows
                .iter()
                .zip(baseline.iter_mut())
                .map(|(row, base)| {
                    let y0 = *base;
                    let y1 = y0 + row.values.get(slot).copied().unwrap_or(0.0);
                    *base = y1;
                    StackPoint { year: row.year, y0, y1 }
                })
                .collect();
            Layer {
                key: key.clone(),
                points,
            }
        })
        .collect()
}
