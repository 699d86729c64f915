//! Raw record types and CSV loader for the music catalog dataset.
//!
//! Every chart pipeline starts here: rows are projected through typed field
//! coercions into [`RawRecord`]s without validation. Deciding which rows are
//! usable is left to each pipeline in `mcd-data`.

pub mod coerce;
pub mod error;
pub mod loader;
pub mod record;

pub use error::LoadError;
pub use loader::{parse_records, parse_records_str, read_records};
pub use record::{Column, RawRecord};
