//! Column type inference.

use serde::Serialize;
use sheetcheck_sheet::CellValue;
use std::fmt;

/// Inferred type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    Boolean,
    DateTime,
    Text,
    Mixed,
}

impl ColumnType {
    /// Label used in reports
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Boolean => "boolean",
            ColumnType::DateTime => "datetime",
            ColumnType::Text => "text",
            ColumnType::Mixed => "mixed",
        }
    }

    /// Kind of a single cell, `None` for nulls
    #[must_use]
    pub fn of(cell: &CellValue) -> Option<Self> {
        match cell {
            CellValue::Null => None,
            CellValue::Bool(_) => Some(ColumnType::Boolean),
            CellValue::Int(_) => Some(ColumnType::Integer),
            CellValue::Float(f) if f.is_nan() => None,
            CellValue::Float(_) => Some(ColumnType::Float),
            CellValue::DateTime(_) => Some(ColumnType::DateTime),
            CellValue::String(_) => Some(ColumnType::Text),
        }
    }

    /// Combine two kinds seen in the same column.
    ///
    /// Integers widen to floats; any other disagreement is `Mixed`.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        use ColumnType::{Float, Integer, Mixed};

        match (self, other) {
            (a, b) if a == b => a,
            (Integer | Float, Integer | Float) => Float,
            _ => Mixed,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Infer the dominant type of a column from its non-null cells.
///
/// A column with no non-null cells is reported as `Text`.
pub fn infer_column_type<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> ColumnType {
    let mut inferred: Option<ColumnType> = None;

    for kind in cells.into_iter().filter_map(ColumnType::of) {
        let next = inferred.map_or(kind, |acc| acc.merge(kind));
        if next == ColumnType::Mixed {
            return ColumnType::Mixed;
        }
        inferred = Some(next);
    }

    inferred.unwrap_or(ColumnType::Text)
}
