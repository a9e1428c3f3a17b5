use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The record list did not decode, e.g. `scopes` missing or not an array.
    #[error("Malformed token records: {0}")]
    MalformedRecords(#[from] serde_json::Error),
    #[error("Timestamp {0} is outside the representable range")]
    TimestampOutOfRange(i64),
    /// A column handed its renderer a value of the wrong shape.
    #[error("Column `{column}` expected {expected}, got {actual}")]
    UnexpectedCellValue {
        column: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Invalid table configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn unexpected_cell_value(
        column: &'static str,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::UnexpectedCellValue {
            column,
            expected,
            actual,
        }
    }
}
