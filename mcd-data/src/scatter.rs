//! Scatter pipeline: top artists' popularity against their average track popularity.

use crate::aggregate::{aggregate_artists, threshold_filter, NumericField};
use mcd_catalog::RawRecord;
use serde::Serialize;

/// One scatter point before projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterArtist {
    pub artist: String,
    pub artist_popularity: f64,
    pub artist_followers: f64,
    pub avg_track_popularity: f64,
    /// 0..1
    pub explicit_rate: f64,
}

const REQUIRED: [NumericField; 3] = [
    NumericField::ArtistPopularity,
    NumericField::TrackPopularity,
    NumericField::ArtistFollowers,
];

/// Aggregate per artist and keep those at or above `threshold` popularity.
pub fn prepare(records: &[RawRecord], threshold: f64) -> Vec<ScatterArtist> {
    let artists = aggregate_artists(records, &REQUIRED);
    let kept: Vec<ScatterArtist> = threshold_filter(artists, threshold)
        .into_iter()
        .map(|a| ScatterArtist {
            artist: a.artist,
            artist_popularity: a.artist_popularity,
            artist_followers: a.artist_followers,
            avg_track_popularity: a.avg_track_popularity,
            explicit_rate: a.explicit_rate,
        })
        .collect();
    log::debug!("scatter: {} artists at or above {}", kept.len(), threshold);
    kept
}
