//! Per-artist reduction shared by the bar, scatter and parallel pipelines.
//!
//! Rows are grouped by trimmed artist name. Popularity and followers reduce
//! with `max` (they should be constant per artist), averages with a running
//! sum and count. Apart from `genre`, the result does not depend on row order.

use mcd_catalog::RawRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Genre reported when none of an artist's rows carries one.
pub const UNKNOWN_GENRE: &str = "Unknown";

/// Numeric fields a pipeline may require to be finite.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum NumericField {
    ArtistPopularity,
    ArtistFollowers,
    TrackPopularity,
    TrackDuration,
}

impl NumericField {
    pub fn read(self, record: &RawRecord) -> f64 {
        match self {
            NumericField::ArtistPopularity => record.artist_popularity,
            NumericField::ArtistFollowers => record.artist_followers,
            NumericField::TrackPopularity => record.track_popularity,
            NumericField::TrackDuration => record.track_duration_min,
        }
    }
}

/// Summary statistics for one artist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistAggregate {
    pub artist: String,
    pub artist_popularity: f64,
    pub artist_followers: f64,
    pub avg_track_popularity: f64,
    pub track_count: usize,
    /// Minutes
    pub avg_track_duration: f64,
    /// Fraction of rows flagged explicit, in [0, 1]
    pub explicit_rate: f64,
    pub genre: String,
}

#[derive(Debug)]
struct Accumulator {
    popularity: f64,
    followers: f64,
    track_popularity_sum: f64,
    duration_sum: f64,
    explicit_count: usize,
    count: usize,
    genre: Option<String>,
}

impl Accumulator {
    fn start(record: &RawRecord) -> Self {
        Accumulator {
            popularity: record.artist_popularity,
            followers: record.artist_followers,
            track_popularity_sum: record.track_popularity,
            duration_sum: record.track_duration_min,
            explicit_count: usize::from(record.explicit),
            count: 1,
            genre: non_empty(&record.artist_genres),
        }
    }

    fn add(&mut self, record: &RawRecord) {
        self.popularity = self.popularity.max(record.artist_popularity);
        self.followers = self.followers.max(record.artist_followers);
        self.track_popularity_sum += record.track_popularity;
        self.duration_sum += record.track_duration_min;
        self.explicit_count += usize::from(record.explicit);
        self.count += 1;
        if self.genre.is_none() {
            self.genre = non_empty(&record.artist_genres);
        }
    }

    fn finish(self, artist: String) -> ArtistAggregate {
        let n = self.count as f64;
        ArtistAggregate {
            artist,
            artist_popularity: self.popularity,
            artist_followers: self.followers,
            avg_track_popularity: self.track_popularity_sum / n,
            track_count: self.count,
            avg_track_duration: self.duration_sum / n,
            explicit_rate: self.explicit_count as f64 / n,
            genre: self.genre.unwrap_or_else(|| UNKNOWN_GENRE.to_string()),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Whether a row may contribute to an aggregate: a non-blank artist name and
/// every `required` field finite.
pub fn accepts(record: &RawRecord, required: &[NumericField]) -> bool {
    !record.artist_name.trim().is_empty()
        && required.iter().all(|field| field.read(record).is_finite())
}

/// Group `records` by trimmed artist name and reduce each group.
///
/// Rejected rows are dropped silently. Fields not listed in `required` are
/// still reduced but may come out as `NaN`.
pub fn aggregate_artists(
    records: &[RawRecord],
    required: &[NumericField],
) -> BTreeMap<String, ArtistAggregate> {
    let mut groups: BTreeMap<String, Accumulator> = BTreeMap::new();
    for record in records.iter().filter(|r| accepts(r, required)) {
        let name = record.artist_name.trim();
        match groups.get_mut(name) {
            Some(acc) => acc.add(record),
            None => {
                groups.insert(name.to_string(), Accumulator::start(record));
            }
        }
    }
    groups
        .into_iter()
        .map(|(name, acc)| {
            let aggregate = acc.finish(name.clone());
            (name, aggregate)
        })
        .collect()
}

/// Keep only artists whose popularity is at least `min_popularity`.
pub fn threshold_filter(
    aggregates: BTreeMap<String, ArtistAggregate>,
    min_popularity: f64,
) -> Vec<ArtistAggregate> {
    aggregates
        .into_values()
        .filter(|a| a.artist_popularity >= min_popularity)
        .collect()
}
