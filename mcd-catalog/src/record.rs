use serde::Serialize;

/// Columns the loader projects out of the source table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Column {
    ArtistName,
    ArtistPopularity,
    ArtistFollowers,
    TrackPopularity,
    TrackDurationMin,
    Explicit,
    ArtistGenres,
    AlbumReleaseDate,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::ArtistName,
        Column::ArtistPopularity,
        Column::ArtistFollowers,
        Column::TrackPopularity,
        Column::TrackDurationMin,
        Column::Explicit,
        Column::ArtistGenres,
        Column::AlbumReleaseDate,
    ];

    /// Header name in the CSV file.
    pub fn header(self) -> &'static str {
        match self {
            Column::ArtistName => "artist_name",
            Column::ArtistPopularity => "artist_popularity",
            Column::ArtistFollowers => "artist_followers",
            Column::TrackPopularity => "track_popularity",
            Column::TrackDurationMin => "track_duration_min",
            Column::Explicit => "explicit",
            Column::ArtistGenres => "artist_genres",
            Column::AlbumReleaseDate => "album_release_date",
        }
    }
}

/// One row of the catalog, after field coercion.
///
/// Numeric fields hold `NaN` when the cell could not be read. Nothing is
/// validated at this stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawRecord {
    pub artist_name: String,
    pub artist_popularity: f64,
    pub artist_followers: f64,
    pub track_popularity: f64,
    /// Minutes
    pub track_duration_min: f64,
    pub explicit: bool,
    pub artist_genres: String,
    /// Year taken from `album_release_date`, if it starts with one.
    pub release_year: Option<i32>,
}

impl RawRecord {
    /// Convenience constructor for a fully valid row, mostly for tests and fixtures.
    pub fn new(artist_name: &str, artist_popularity: f64, track_popularity: f64) -> Self {
        RawRecord {
            artist_name: artist_name.to_string(),
            artist_popularity,
            artist_followers: 0.0,
            track_popularity,
            track_duration_min: 3.0,
            explicit: false,
            artist_genres: String::new(),
            release_year: None,
        }
    }
}
