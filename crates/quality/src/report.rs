use crate::types::ColumnType;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Duplicate counts for a dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateSummary {
    /// Rows equal to an earlier row across every column
    pub duplicate_rows: usize,
    /// Per column, values equal to an earlier value in the same column
    pub duplicate_values: IndexMap<String, usize>,
}

/// Result of running every quality check on a dataset.
///
/// All three maps are keyed by column name in dataset column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub null_values: IndexMap<String, f64>,
    pub duplicates: DuplicateSummary,
    pub data_types: IndexMap<String, ColumnType>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Excel Data Quality Report ===")?;

        writeln!(f, "\nNull Values (%):")?;
        for (col, pct) in &self.null_values {
            writeln!(f, "{col}: {pct:.2}%")?;
        }

        writeln!(f, "\nDuplicates:")?;
        writeln!(f, "Duplicate rows: {}", self.duplicates.duplicate_rows)?;
        writeln!(f, "\nDuplicate values by column:")?;
        for (col, count) in &self.duplicates.duplicate_values {
            writeln!(f, "{col}: {count}")?;
        }

        writeln!(f, "\nData Types:")?;
        for (col, dtype) in &self.data_types {
            writeln!(f, "{col}: {dtype}")?;
        }

        Ok(())
    }
}
