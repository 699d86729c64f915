//! Parallel-coordinates pipeline: six metrics per top artist.

use crate::aggregate::{aggregate_artists, threshold_filter, ArtistAggregate, NumericField};
use mcd_catalog::RawRecord;

/// The metrics drawn as vertical axes, in display order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Dimension {
    ArtistPopularity,
    AvgTrackPopularity,
    ArtistFollowers,
    TrackCount,
    AvgTrackDuration,
    ExplicitRate,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::ArtistPopularity,
        Dimension::AvgTrackPopularity,
        Dimension::ArtistFollowers,
        Dimension::TrackCount,
        Dimension::AvgTrackDuration,
        Dimension::ExplicitRate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Dimension::ArtistPopularity => "artist_popularity",
            Dimension::AvgTrackPopularity => "avg_track_popularity",
            Dimension::ArtistFollowers => "artist_followers",
            Dimension::TrackCount => "track_count",
            Dimension::AvgTrackDuration => "avg_track_duration",
            Dimension::ExplicitRate => "explicit_rate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Dimension::ArtistPopularity => "Artist Popularity",
            Dimension::AvgTrackPopularity => "Avg Track Popularity",
            Dimension::ArtistFollowers => "Followers",
            Dimension::TrackCount => "Track Count",
            Dimension::AvgTrackDuration => "Average Duration (min)",
            Dimension::ExplicitRate => "Explicit Rate",
        }
    }

    pub fn value(self, artist: &ArtistAggregate) -> f64 {
        match self {
            Dimension::ArtistPopularity => artist.artist_popularity,
            Dimension::AvgTrackPopularity => artist.avg_track_popularity,
            Dimension::ArtistFollowers => artist.artist_followers,
            Dimension::TrackCount => artist.track_count as f64,
            Dimension::AvgTrackDuration => artist.avg_track_duration,
            Dimension::ExplicitRate => artist.explicit_rate,
        }
    }
}

const REQUIRED: [NumericField; 4] = [
    NumericField::ArtistPopularity,
    NumericField::TrackPopularity,
    NumericField::ArtistFollowers,
    NumericField::TrackDuration,
];

/// Aggregate per artist and keep those at or above `threshold` popularity.
pub fn prepare(records: &[RawRecord], threshold: f64) -> Vec<ArtistAggregate> {
    let kept = threshold_filter(aggregate_artists(records, &REQUIRED), threshold);
    log::debug!("parallel: {} artists at or above {}", kept.len(), threshold);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::POPULARITY_THRESHOLD;

    #[test]
    fn duration_is_required() {
        let rows = vec![
            RawRecord {
                track_duration_min: f64::NAN,
                ..RawRecord::new("A", 90.0, 50.0)
            },
            RawRecord::new("B", 90.0, 50.0),
        ];
        let artists = prepare(&rows, POPULARITY_THRESHOLD);
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].artist, "B");
    }

    #[test]
    fn dimension_values_follow_aggregate() {
        let rows = vec![
            RawRecord {
                artist_followers: 1_000.0,
                track_duration_min: 3.0,
                explicit: true,
                artist_genres: "pop".into(),
                ..RawRecord::new("A", 90.0, 40.0)
            },
            RawRecord {
                artist_followers: 2_000.0,
                track_duration_min: 5.0,
                ..RawRecord::new("A", 88.0, 60.0)
            },
        ];
        let artists = prepare(&rows, POPULARITY_THRESHOLD);
        let a = &artists[0];
        let values: Vec<f64> = Dimension::ALL.iter().map(|d| d.value(a)).collect();
        assert_eq!(values, vec![90.0, 50.0, 2_000.0, 2.0, 4.0, 0.5]);
        assert_eq!(a.genre, "pop");
    }

    #[test]
    fn labels_and_keys_are_distinct() {
        let mut keys: Vec<&str> = Dimension::ALL.iter().map(|d| d.key()).collect();
        keys.dedup();
        assert_eq!(keys.len(), 6);
        assert_eq!(Dimension::ArtistFollowers.label(), "Followers");
    }
}
