use std::fmt;

/// Errors that can occur while loading the catalog file.
///
/// Any of these means the whole load failed. Single malformed rows are not
/// errors; they are dropped later by the pipeline that reads them.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be opened or read.
    Io(std::io::Error),
    /// The byte stream is not valid CSV.
    Csv(csv::Error),
    /// The header row lacks a column every pipeline relies on.
    MissingColumn(&'static str),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "Load error: {}", e),
            LoadError::Csv(e) => write!(f, "Load error: malformed CSV: {}", e),
            LoadError::MissingColumn(name) => {
                write!(f, "Load error: missing column `{}`", name)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Csv(e) => Some(e),
            LoadError::MissingColumn(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<csv::Error> for LoadError {
    fn from(e: csv::Error) -> Self {
        LoadError::Csv(e)
    }
}
