mod parser;

use std::io::Read;
use std::path::Path;

use super::markers::MarkerRecord;

#[derive(Debug, thiserror::Error)]
pub enum MarkerImportError {
    #[error("failed to read marker export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid marker CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: '{value}' is not a YYYY-MM-DD or RFC 3339 date")]
    InvalidDate { line: usize, value: String },
    #[error("line {line}: column '{column}' has non-numeric value '{value}'")]
    InvalidNumber {
        line: usize,
        column: String,
        value: String,
    },
    #[error("line {line}: {source}")]
    Record {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads marker assessments from a CSV export whose header row uses the
/// marker field names. Blank cells are treated as missing values.
pub struct MarkerImporter;

impl MarkerImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<MarkerRecord>, MarkerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<MarkerRecord>, MarkerImportError> {
        let records = parser::parse_records(reader)?;
        tracing::debug!(count = records.len(), "imported marker records");
        Ok(records)
    }

    /// Imports and attaches freshly computed scores to every record.
    pub fn scored_from_reader<R: Read>(reader: R) -> Result<Vec<MarkerRecord>, MarkerImportError> {
        Ok(Self::from_reader(reader)?
            .into_iter()
            .map(MarkerRecord::scored)
            .collect())
    }
}
