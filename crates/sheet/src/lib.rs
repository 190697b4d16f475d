//! Spreadsheet reader for sheetcheck
//!
//! Loads one worksheet of an Excel/OpenDocument workbook, or a CSV/TSV file,
//! into an immutable [`Dataset`] of named, equal-length columns. Each cell is
//! resolved to a typed [`CellValue`] or null.
//!
//! # Examples
//!
//! ## Building a dataset in memory
//!
//! ```
//! use sheetcheck_sheet::{CellValue, Dataset};
//!
//! let ds = Dataset::from_rows(
//!     vec!["Name", "Age"],
//!     vec![
//!         vec![CellValue::from("Alice"), CellValue::Int(30)],
//!         vec![CellValue::from("Bob"), CellValue::Null],
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(ds.row_count(), 2);
//! assert_eq!(ds.column("Age").unwrap().null_count(), 1);
//! ```
//!
//! ## Loading from a file
//!
//! ```no_run
//! use sheetcheck_sheet::{load, ReadOptions};
//!
//! let ds = load("data.xlsx", &ReadOptions::default().with_sheet("Orders")).unwrap();
//! ```
//!
//! # Cell conversion
//!
//! - Numbers with no fractional part are read as integers, since workbooks
//!   store every number as a float.
//! - Date-formatted cells and ISO date strings become date/times.
//! - Text cells matching one of the NA markers (`NA`, `#N/A`, `null`, ...)
//!   become null.
//! - The first row names the columns unless headers are turned off. Blank
//!   names become `Unnamed: <index>` and repeats are suffixed `.1`, `.2`, ...

mod cell;
mod csv;
mod dataset;
mod error;
mod reader;
mod workbook;

/// Re-export cell value types.
pub use cell::{parse_datetime, CellKey, CellValue};
/// Re-export CSV options and readers.
pub use csv::{from_csv_reader, from_csv_str, CsvOptions};
/// Re-export dataset types.
pub use dataset::{Column, Dataset};
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export the file loader and its options.
pub use reader::{load, ReadOptions, DEFAULT_NA_VALUES};
