use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("TLE directory not found: {0}")]
    DirectoryNotFound(String),
    #[error("TLE file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Catalog source {source_name} returned status {status}")]
    Status { source_name: String, status: u16 },
}

/// Why a single TLE block was rejected during ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IngestError {
    #[error("line {line} has {length} characters, expected 69")]
    LineLength { line: u8, length: usize },
    #[error("line {line} does not start with '{line} '")]
    LineNumber { line: u8 },
    #[error("invalid catalog number: {0:?}")]
    CatalogNumber(String),
    #[error("catalog numbers differ between lines ({0} vs {1})")]
    CatalogMismatch(u32, u32),
}

/// Failure to decode the mean orbit fields of a record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementsError {
    #[error("element line too short for field {0}")]
    Truncated(&'static str),
    #[error("field {field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },
    #[error("mean motion must be positive, got {0}")]
    MeanMotion(f64),
    #[error("inclination {0} outside [0, 180] degrees")]
    Inclination(f64),
}
