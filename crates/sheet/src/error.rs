use thiserror::Error;

/// Errors that can occur while reading a spreadsheet into a dataset
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Unsupported file format: '{extension}' (expected xlsx, xlsm, xlsb, xls, ods, csv or tsv)")]
    UnsupportedFormat { extension: String },

    #[error("Unreadable workbook: {0}")]
    Workbook(String),

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Duplicate column name: {name}")]
    DuplicateColumnName { name: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for SheetError {
    fn from(err: calamine::Error) -> Self {
        SheetError::Workbook(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SheetError>;
