use thiserror::Error;

/// Errors raised by the quality checker
#[derive(Debug, Error)]
pub enum QualityError {
    #[error("Failed to load spreadsheet: {0}")]
    Load(#[from] sheetcheck_sheet::SheetError),
}

pub type Result<T> = std::result::Result<T, QualityError>;
