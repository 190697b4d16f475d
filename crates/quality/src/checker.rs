use crate::error::Result;
use crate::report::{DuplicateSummary, Report};
use crate::types::{infer_column_type, ColumnType};
use indexmap::IndexMap;
use sheetcheck_sheet::{load, CellKey, CellValue, Dataset, ReadOptions};
use std::collections::HashSet;
use std::path::Path;

/// Runs quality checks over one loaded dataset.
///
/// The dataset is read once and never changes, so every check can be run any
/// number of times, in any order, with the same result.
#[derive(Debug, Clone)]
pub struct QualityChecker {
    dataset: Dataset,
}

impl QualityChecker {
    /// Wrap an already loaded dataset
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        QualityChecker { dataset }
    }

    /// Load a spreadsheet with default options (first sheet, header row)
    ///
    /// # Errors
    ///
    /// Returns `QualityError::Load` if the file is missing, unsupported or unreadable.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path_with_options(path, &ReadOptions::default())
    }

    /// Load a spreadsheet with explicit read options
    ///
    /// # Errors
    ///
    /// Returns `QualityError::Load` if the file is missing, unsupported or unreadable.
    pub fn from_path_with_options<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Self> {
        let dataset = load(path, options)?;
        Ok(Self::new(dataset))
    }

    /// The dataset under inspection
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Percentage of null cells per column.
    ///
    /// A dataset with no rows reports 0.0 for every column.
    pub fn check_null_values(&self) -> IndexMap<String, f64> {
        let rows = self.dataset.row_count();

        let result: IndexMap<String, f64> = self
            .dataset
            .columns()
            .iter()
            .map(|column| {
                let pct = if rows == 0 {
                    0.0
                } else {
                    column.null_count() as f64 / rows as f64 * 100.0
                };
                (column.name().to_string(), pct)
            })
            .collect();

        tracing::debug!(columns = result.len(), rows, "Checked null values");
        result
    }

    /// Count repeated rows and repeated values per column.
    ///
    /// Only repeats are counted: the first occurrence of a row or value is not.
    pub fn check_duplicates(&self) -> DuplicateSummary {
        let mut seen_rows: HashSet<Vec<CellKey<'_>>> = HashSet::new();
        let mut duplicate_rows = 0usize;

        for index in 0..self.dataset.row_count() {
            let key: Vec<CellKey<'_>> = self.dataset.row(index).map(CellValue::key).collect();
            if !seen_rows.insert(key) {
                duplicate_rows += 1;
            }
        }

        let duplicate_values: IndexMap<String, usize> = self
            .dataset
            .columns()
            .iter()
            .map(|column| (column.name().to_string(), count_repeats(column.values())))
            .collect();

        tracing::debug!(duplicate_rows, "Checked duplicates");
        DuplicateSummary {
            duplicate_rows,
            duplicate_values,
        }
    }

    /// Inferred type of each column
    pub fn check_data_types(&self) -> IndexMap<String, ColumnType> {
        let result: IndexMap<String, ColumnType> = self
            .dataset
            .columns()
            .iter()
            .map(|column| (column.name().to_string(), infer_column_type(column.values())))
            .collect();

        tracing::debug!(types = ?result, "Checked data types");
        result
    }

    /// Run every check and collect the results into a fresh report
    pub fn generate_report(&self) -> Report {
        Report {
            null_values: self.check_null_values(),
            duplicates: self.check_duplicates(),
            data_types: self.check_data_types(),
        }
    }
}

fn count_repeats(values: &[CellValue]) -> usize {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().filter(|v| !seen.insert(v.key())).count()
}
