use crate::cell::{parse_datetime, CellValue};
use crate::dataset::Dataset;
use crate::error::{Result, SheetError};
use crate::reader::ReadOptions;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        // Spreadsheets store every number as a float
        Data::Float(f) => match CellValue::Float(*f).as_int() {
            Some(i) => CellValue::Int(i),
            None => CellValue::Float(*f),
        },
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(value) if dt.is_datetime() => CellValue::DateTime(value),
            // Durations are kept as fractional days
            _ => CellValue::Float(dt.as_f64()),
        },
        Data::DateTimeIso(s) => {
            parse_datetime(s).map_or_else(|| CellValue::String(s.clone()), CellValue::DateTime)
        }
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(e.to_string()),
    }
}

/// Load one worksheet of a workbook (xlsx, xlsm, xlsb, xls, ods) into a dataset
///
/// # Errors
///
/// Returns error if the workbook cannot be opened, the requested sheet is
/// missing, or the rows do not fit the header.
pub(crate) fn load_workbook(path: &Path, options: &ReadOptions) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)?;

    let sheet_names = workbook.sheet_names();
    let sheet_name = match &options.sheet {
        Some(name) if sheet_names.contains(name) => name.clone(),
        Some(name) => {
            tracing::warn!(sheet = %name, available = ?sheet_names, "Requested sheet not in workbook");
            return Err(SheetError::SheetNotFound { name: name.clone() });
        }
        None => match sheet_names.first() {
            Some(first) => first.clone(),
            None => {
                tracing::debug!(path = %path.display(), "Workbook has no sheets");
                return Ok(Dataset::default());
            }
        },
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    tracing::debug!(
        sheet = %sheet_name,
        height = range.height(),
        width = range.width(),
        "Read worksheet range"
    );

    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| {
            row.iter()
                .map(|data| options.apply_na_values(data_to_cell_value(data)))
                .collect()
        })
        .collect();

    Ok(options.build_dataset(rows)?.with_name(&sheet_name))
}
