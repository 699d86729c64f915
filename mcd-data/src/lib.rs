//! Per-chart aggregation pipelines over music catalog records.
//!
//! Each chart owns one pipeline module and calls it on its own copy of the
//! loaded rows:
//! - [`bar`]: max popularity per artist, binned into fixed-width buckets
//! - [`scatter`]: per-artist popularity vs. average track popularity, top artists only
//! - [`parallel`]: six per-artist metrics, top artists only
//! - [`stream`]: mean track duration per (artist, year) for a fixed artist list
//!
//! The per-artist reduction they share lives in [`aggregate`].

pub mod aggregate;
pub mod bar;
pub mod parallel;
pub mod scatter;
pub mod stream;

/// Minimum artist popularity kept by the scatter and parallel pipelines.
pub const POPULARITY_THRESHOLD: f64 = 80.0;
