use thiserror::Error;

#[derive(Error, Debug)]
pub enum Ccsv2SqlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("Input file is not a CSV file.")]
    InputExtension(String),

    #[error("Output file is not a SQL file.")]
    OutputExtension(String),

    #[error("CSV input is empty")]
    EmptyInput,

    #[error("CSV input has a header row but no data rows")]
    NoDataRows,

    #[error("Column count mismatch: {headers} header fields, {values} values in first row")]
    ColumnCountMismatch { headers: usize, values: usize },
}

impl Ccsv2SqlError {
    /// Errors the command line reports on stdout, the way argument checks are reported.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Ccsv2SqlError::InputExtension(_) | Ccsv2SqlError::OutputExtension(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Ccsv2SqlError>;
