//! CSV loading for the catalog file.
//!
//! Expected format (with headers, extra columns ignored):
//!
//! ```text
//! artist_name,artist_popularity,artist_followers,track_popularity,track_duration_min,explicit,artist_genres,album_release_date
//! Drake,95,93000000,88,3.6,true,hip hop,2021-09-03
//! ```

use crate::coerce;
use crate::error::LoadError;
use crate::record::{Column, RawRecord};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

/// Column positions resolved from the header row.
struct ColumnIndex([usize; 8]);

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, LoadError> {
        let mut positions = [0usize; 8];
        for (slot, column) in positions.iter_mut().zip(Column::ALL) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == column.header())
                .ok_or(LoadError::MissingColumn(column.header()))?;
        }
        Ok(ColumnIndex(positions))
    }

    fn get<'r>(&self, record: &'r StringRecord, column: Column) -> Option<&'r str> {
        record.get(self.0[column as usize])
    }

    fn project(&self, record: &StringRecord) -> RawRecord {
        RawRecord {
            artist_name: coerce::text(self.get(record, Column::ArtistName)),
            artist_popularity: coerce::number(self.get(record, Column::ArtistPopularity)),
            artist_followers: coerce::number(self.get(record, Column::ArtistFollowers)),
            track_popularity: coerce::number(self.get(record, Column::TrackPopularity)),
            track_duration_min: coerce::number(self.get(record, Column::TrackDurationMin)),
            explicit: coerce::flag(self.get(record, Column::Explicit)),
            artist_genres: coerce::text(self.get(record, Column::ArtistGenres)),
            release_year: coerce::year(self.get(record, Column::AlbumReleaseDate)),
        }
    }
}

/// Parse catalog rows from any reader.
///
/// Short rows are accepted; their missing cells coerce as absent values.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RawRecord>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let index = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(index.project(&record));
    }
    log::info!("loader: read {} catalog rows", records.len());
    Ok(records)
}

/// Parse catalog rows from an in-memory CSV string.
pub fn parse_records_str(csv_data: &str) -> Result<Vec<RawRecord>, LoadError> {
    parse_records(csv_data.as_bytes())
}

/// Read and parse the catalog file at `path`.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, LoadError> {
    let file = std::fs::File::open(path.as_ref())?;
    parse_records(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"track_id,artist_name,artist_popularity,artist_followers,track_popularity,track_duration_min,explicit,artist_genres,album_release_date
t1, Drake ,95,93000000,88,3.6,TRUE,hip hop,2021-09-03
t2,Taylor Swift,100,120000000,91,4.1,false,pop,2022
t3,,50,100,20,2.0,false,,2010-01-01
t4,Broken,not-a-number,1,2,3,false,rock,unknown
t5,Short,70
"#;

    #[test]
    fn parses_typed_fields() {
        let records = parse_records_str(CATALOG).unwrap();
        assert_eq!(records.len(), 5);

        let drake = &records[0];
        assert_eq!(drake.artist_name, "Drake");
        assert_eq!(drake.artist_popularity, 95.0);
        assert_eq!(drake.artist_followers, 93_000_000.0);
        assert!(drake.explicit);
        assert_eq!(drake.artist_genres, "hip hop");
        assert_eq!(drake.release_year, Some(2021));

        assert_eq!(records[1].release_year, Some(2022));
        assert_eq!(records[2].artist_name, "");
        assert!(records[3].artist_popularity.is_nan());
        assert_eq!(records[3].release_year, None);
    }

    #[test]
    fn short_rows_read_as_absent() {
        let records = parse_records_str(CATALOG).unwrap();
        let short = &records[4];
        assert_eq!(short.artist_popularity, 70.0);
        assert!(short.track_popularity.is_nan());
        assert!(!short.explicit);
        assert_eq!(short.release_year, None);
    }

    #[test]
    fn missing_column_fails_load() {
        let csv = "artist_name,artist_popularity\nDrake,95\n";
        match parse_records_str(csv) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "artist_followers"),
            other => panic!("expected missing column, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_fails_load() {
        let err = read_records("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn nan_fields_serialize_as_null() {
        let records = parse_records_str(CATALOG).unwrap();
        let json = serde_json::to_value(&records[3]).unwrap();
        assert!(json["artist_popularity"].is_null());
    }
}
