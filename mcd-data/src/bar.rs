//! Bar pipeline: how many artists fall in each popularity range.

use crate::aggregate::{aggregate_artists, NumericField};
use mcd_catalog::RawRecord;
use serde::Serialize;

/// Upper bound on the number of bins a spec may produce.
pub const MAX_BINS: usize = 1_000;

/// Fixed-width bins over a closed domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinSpec {
    pub min: f64,
    pub max: f64,
    pub width: f64,
}

impl Default for BinSpec {
    fn default() -> Self {
        BinSpec {
            min: 0.0,
            max: 100.0,
            width: 10.0,
        }
    }
}

impl BinSpec {
    /// A finite, positive width that splits the domain into at most
    /// [`MAX_BINS`] bins.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.width > 0.0
            && self.max > self.min
            && (self.max - self.min) / self.width <= MAX_BINS as f64
    }

    /// Bin edges: `min`, every interior multiple of `width`, then `max`.
    ///
    /// Interior edges are rounded to the decimals of `width`. An invalid
    /// spec yields the single bin `[min, max]`.
    pub fn edges(&self) -> Vec<f64> {
        let mut edges = vec![self.min];
        if self.is_valid() {
            let scale = 10f64.powi(decimals(self.width));
            let n = ((self.max - self.min) / self.width).ceil() as usize;
            for k in 1..n {
                let edge = ((self.min + k as f64 * self.width) * scale).round() / scale;
                if edge >= self.max {
                    break;
                }
                edges.push(edge);
            }
        }
        edges.push(self.max);
        edges
    }
}

/// Decimal places needed to write `width`, capped at 9.
fn decimals(width: f64) -> i32 {
    let mut d = 0;
    while d < 9 && ((width * 10f64.powi(d)).fract()).abs() > 1e-9 {
        d += 1;
    }
    d
}

/// One popularity range and the number of artists in it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    /// `"{low}-{high}"`, e.g. `"0-10"`
    pub label: String,
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

fn format_edge(edge: f64) -> String {
    if edge.fract() == 0.0 {
        format!("{}", edge as i64)
    } else {
        format!("{}", edge)
    }
}

/// Count `values` into the bins of `spec`.
///
/// Bins are half-open `[low, high)` except the last, which also includes
/// `spec.max`. Values outside the domain (and `NaN`) are not counted.
pub fn bin_values(values: impl IntoIterator<Item = f64>, spec: &BinSpec) -> Vec<Bucket> {
    let edges = spec.edges();
    let mut buckets: Vec<Bucket> = edges
        .windows(2)
        .map(|w| Bucket {
            label: format!("{}-{}", format_edge(w[0]), format_edge(w[1])),
            low: w[0],
            high: w[1],
            count: 0,
        })
        .collect();
    let last = buckets.len() - 1;

    for value in values {
        if !(value >= spec.min && value <= spec.max) {
            continue;
        }
        let slot = buckets
            .iter()
            .rposition(|b| b.low <= value)
            .unwrap_or(0)
            .min(last);
        buckets[slot].count += 1;
    }
    buckets
}

/// Full bar pipeline: per-artist max popularity, then binned.
pub fn prepare(records: &[RawRecord], spec: &BinSpec) -> Vec<Bucket> {
    let artists = aggregate_artists(records, &[NumericField::ArtistPopularity]);
    log::debug!("bar: {} artists binned", artists.len());
    bin_values(artists.values().map(|a| a.artist_popularity), spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(buckets: &[Bucket]) -> Vec<(String, usize)> {
        buckets.iter().map(|b| (b.label.clone(), b.count)).collect()
    }

    #[test]
    fn ten_buckets_over_percent_domain() {
        let buckets = bin_values(Vec::<f64>::new(), &BinSpec::default());
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["0-10", "10-20", "20-30", "30-40", "40-50", "50-60", "60-70", "70-80", "80-90", "90-100"]
        );
    }

    #[test]
    fn boundaries_go_to_upper_bucket_and_top_edge_is_kept() {
        let buckets = bin_values(vec![0.0, 9.0, 10.0, 55.0, 100.0], &BinSpec::default());
        let c = counts(&buckets);
        assert_eq!(c[0], ("0-10".to_string(), 2));
        assert_eq!(c[1], ("10-20".to_string(), 1));
        assert_eq!(c[5], ("50-60".to_string(), 1));
        assert_eq!(c[9], ("90-100".to_string(), 1));
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 5);
        for (i, b) in buckets.iter().enumerate() {
            if ![0, 1, 5, 9].contains(&i) {
                assert_eq!(b.count, 0, "bucket {}", b.label);
            }
        }
    }

    #[test]
    fn out_of_domain_values_are_dropped() {
        let buckets = bin_values(vec![-1.0, 100.5, f64::NAN, 50.0], &BinSpec::default());
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn uneven_width_closes_with_domain_max() {
        let spec = BinSpec { min: 0.0, max: 100.0, width: 30.0 };
        let buckets = bin_values(vec![95.0, 100.0], &spec);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["0-30", "30-60", "60-90", "90-100"]);
        assert_eq!(buckets[3].count, 2);
    }

    #[test]
    fn fractional_width_labels_have_no_float_noise() {
        let spec = BinSpec { min: 0.0, max: 1.0, width: 0.1 };
        let buckets = bin_values(vec![0.3, 1.0], &spec);
        let labels: Vec<&str> = buckets.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["0-0.1", "0.1-0.2", "0.2-0.3", "0.3-0.4", "0.4-0.5", "0.5-0.6", "0.6-0.7", "0.7-0.8", "0.8-0.9", "0.9-1"]
        );
        assert_eq!(buckets[3].count, 1);
        assert_eq!(buckets[9].count, 1);
    }

    #[test]
    fn tiny_or_bad_widths_collapse_to_one_bin() {
        for width in [1e-5, 1e-12, 0.0, -10.0, f64::NAN, f64::INFINITY] {
            let spec = BinSpec { width, ..BinSpec::default() };
            assert!(!spec.is_valid(), "width {}", width);
            assert_eq!(spec.edges(), vec![0.0, 100.0], "width {}", width);
        }
        let finest = BinSpec { width: 0.1, ..BinSpec::default() };
        assert!(finest.is_valid());
        assert_eq!(finest.edges().len(), MAX_BINS + 1);
    }

    #[test]
    fn prepare_counts_unique_artists_once() {
        let rows = vec![
            RawRecord::new("Drake", 95.0, 10.0),
            RawRecord::new("Drake", 96.0, 10.0),
            RawRecord::new("Adele", 55.0, 10.0),
            RawRecord::new("", 5.0, 10.0),
            RawRecord::new("Broken", f64::NAN, 10.0),
        ];
        let buckets = prepare(&rows, &BinSpec::default());
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        assert_eq!(buckets[9].count, 1);
        assert_eq!(buckets[5].count, 1);
    }

    #[test]
    fn bar_ignores_fields_it_does_not_use() {
        let rows = vec![RawRecord {
            track_popularity: f64::NAN,
            artist_followers: f64::NAN,
            ..RawRecord::new("Drake", 95.0, 10.0)
        }];
        let buckets = prepare(&rows, &BinSpec::default());
        assert_eq!(buckets[9].count, 1);
    }
}
