//! Data quality checks for spreadsheets
//!
//! A [`QualityChecker`] owns one loaded dataset and answers three questions
//! about it:
//!
//! - what share of each column is null
//! - how many rows, and how many values per column, repeat an earlier one
//! - what type each column holds
//!
//! # Examples
//!
//! ```
//! use sheetcheck_quality::{ColumnType, QualityChecker};
//! use sheetcheck_sheet::{CellValue, Dataset};
//!
//! let ds = Dataset::from_rows(
//!     vec!["A", "B"],
//!     vec![
//!         vec![CellValue::Int(1), CellValue::from("x")],
//!         vec![CellValue::Int(1), CellValue::from("x")],
//!         vec![CellValue::Null, CellValue::from("y")],
//!     ],
//! )
//! .unwrap();
//!
//! let report = QualityChecker::new(ds).generate_report();
//!
//! assert_eq!(report.duplicates.duplicate_rows, 1);
//! assert_eq!(report.data_types["A"], ColumnType::Integer);
//! println!("{report}");
//! ```

mod checker;
mod error;
mod report;
mod types;

pub use checker::QualityChecker;
pub use error::{QualityError, Result};
pub use report::{DuplicateSummary, Report};
pub use types::{infer_column_type, ColumnType};
