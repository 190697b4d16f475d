use crate::cell::CellValue;
use crate::csv::{load_csv, CsvOptions};
use crate::dataset::{header_names, Dataset};
use crate::error::{Result, SheetError};
use crate::workbook::load_workbook;
use std::path::Path;

/// Text values read as missing unless overridden.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options for reading a spreadsheet into a dataset
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Worksheet to read (default: the first one)
    pub sheet: Option<String>,
    /// Whether the first row contains headers
    pub has_headers: bool,
    /// Text values that are read as null
    pub na_values: Vec<String>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            sheet: None,
            has_headers: true,
            na_values: DEFAULT_NA_VALUES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl ReadOptions {
    /// Set the worksheet to read
    #[must_use]
    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = Some(sheet.into());
        self
    }

    /// Set whether the first row contains headers
    #[must_use]
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Replace the list of text values read as null
    #[must_use]
    pub fn with_na_values<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        self.na_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Check whether a raw text value marks a missing cell
    #[must_use]
    pub fn is_na(&self, value: &str) -> bool {
        self.na_values.iter().any(|na| na == value)
    }

    pub(crate) fn apply_na_values(&self, cell: CellValue) -> CellValue {
        match cell {
            CellValue::String(ref s) if self.is_na(s) => CellValue::Null,
            other => other,
        }
    }

    /// Split off the header row (if any) and assemble the dataset.
    pub(crate) fn build_dataset(&self, mut rows: Vec<Vec<CellValue>>) -> Result<Dataset> {
        if rows.is_empty() {
            return Ok(Dataset::default());
        }

        let names = if self.has_headers {
            let header = rows.remove(0);
            header_names(&header)
        } else {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            (0..width).map(|i| i.to_string()).collect()
        };

        Dataset::from_rows(names, rows)
    }
}

/// Load a spreadsheet file into a dataset, choosing the reader by extension.
///
/// # Errors
///
/// Returns `SheetError::FileNotFound` if the path does not exist,
/// `SheetError::UnsupportedFormat` for unknown extensions, and the reader's
/// error if the file cannot be parsed.
pub fn load<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Dataset> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SheetError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    tracing::debug!(path = %path.display(), format = %extension, "Loading spreadsheet");

    let dataset = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => load_workbook(path, options)?,
        "csv" => load_csv(path, &CsvOptions::default(), options)?,
        "tsv" => load_csv(path, &CsvOptions::tsv(), options)?,
        _ => return Err(SheetError::UnsupportedFormat { extension }),
    };

    tracing::debug!(
        rows = dataset.row_count(),
        columns = dataset.col_count(),
        "Loaded dataset"
    );

    Ok(dataset)
}
