use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use std::collections::{HashMap, HashSet};

/// A named column of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<CellValue>,
}

impl Column {
    /// Create a column from any values convertible to cells
    #[must_use]
    pub fn new<S: Into<String>, T: Into<CellValue>>(name: S, values: Vec<T>) -> Self {
        Column {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the column name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the column cells in row order
    #[must_use]
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    /// Count the null cells
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

/// An immutable table of equal-length named columns (column-major storage)
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    /// Build a dataset from columns.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::LengthMismatch` if the columns differ in length and
    /// `SheetError::DuplicateColumnName` if two columns share a name.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);

        let mut seen = HashSet::new();
        for column in &columns {
            if column.len() != row_count {
                return Err(SheetError::LengthMismatch {
                    expected: row_count,
                    actual: column.len(),
                });
            }
            if !seen.insert(column.name.as_str()) {
                return Err(SheetError::DuplicateColumnName {
                    name: column.name.clone(),
                });
            }
        }

        Ok(Dataset {
            name: "Sheet1".to_string(),
            columns,
            row_count,
        })
    }

    /// Build a dataset from column names and row-major data.
    ///
    /// Rows shorter than the header are padded with nulls.
    ///
    /// # Errors
    ///
    /// Returns `SheetError::LengthMismatch` if a row is wider than the header.
    pub fn from_rows<S, T>(names: Vec<S>, rows: Vec<Vec<T>>) -> Result<Self>
    where
        S: Into<String>,
        T: Into<CellValue>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let width = names.len();

        let mut values: Vec<Vec<CellValue>> = (0..width)
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for row in rows {
            if row.len() > width {
                return Err(SheetError::LengthMismatch {
                    expected: width,
                    actual: row.len(),
                });
            }
            let filled = row.len();
            for (col, cell) in row.into_iter().enumerate() {
                values[col].push(cell.into());
            }
            for column in values.iter_mut().skip(filled) {
                column.push(CellValue::Null);
            }
        }

        let columns = names
            .into_iter()
            .zip(values)
            .map(|(name, values)| Column { name, values })
            .collect();

        Self::new(columns)
    }

    /// Set the dataset name (usually the worksheet it came from)
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Get the dataset name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the dataset has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Get the columns in order
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get the column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    /// Look up a column by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterate over the cells of one row, in column order
    pub fn row(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.columns.iter().filter_map(move |c| c.values.get(index))
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset {
            name: "Sheet1".to_string(),
            columns: Vec::new(),
            row_count: 0,
        }
    }
}

/// Turn a header row into unique column names.
///
/// Blank headers become `Unnamed: <index>`, and repeats get `.1`, `.2`, ...
/// appended in order of appearance.
pub(crate) fn header_names(cells: &[CellValue]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(cells.len());

    for (i, cell) in cells.iter().enumerate() {
        let raw = cell.as_str();
        let base = if raw.trim().is_empty() {
            format!("Unnamed: {i}")
        } else {
            raw
        };

        let mut name = base.clone();
        while let Some(count) = counts.get_mut(&name) {
            *count += 1;
            name = format!("{base}.{count}");
        }
        counts.insert(name.clone(), 0);
        names.push(name);
    }

    names
}
