use crate::cell::CellValue;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::reader::ReadOptions;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV reader options
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Whether to use type inference when reading
    pub infer_types: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            infer_types: true,
        }
    }
}

impl CsvOptions {
    /// Create options for TSV (tab-separated values)
    #[must_use]
    pub fn tsv() -> Self {
        CsvOptions {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    /// Set whether to infer types
    #[must_use]
    pub fn with_type_inference(mut self, infer_types: bool) -> Self {
        self.infer_types = infer_types;
        self
    }
}

pub(crate) fn load_csv(path: &Path, format: &CsvOptions, options: &ReadOptions) -> Result<Dataset> {
    let file = File::open(path)?;
    from_csv_reader(BufReader::new(file), format, options)
}

/// Load a dataset from CSV text
///
/// # Errors
///
/// Returns error if the text is not well-formed CSV or rows are ragged.
pub fn from_csv_str(content: &str, format: &CsvOptions, options: &ReadOptions) -> Result<Dataset> {
    from_csv_reader(content.as_bytes(), format, options)
}

/// Load a dataset from any reader producing CSV
///
/// # Errors
///
/// Returns error if the input is not well-formed CSV or rows are ragged.
pub fn from_csv_reader<R: Read>(reader: R, format: &CsvOptions, options: &ReadOptions) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(format.delimiter)
        .has_headers(false) // We handle headers ourselves
        .from_reader(reader);

    let mut data: Vec<Vec<CellValue>> = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let row: Vec<CellValue> = record
            .iter()
            .map(|field| {
                if options.is_na(field) {
                    CellValue::Null
                } else if format.infer_types {
                    CellValue::parse(field)
                } else {
                    CellValue::String(field.to_string())
                }
            })
            .collect();
        data.push(row);
    }

    options.build_dataset(data)
}
