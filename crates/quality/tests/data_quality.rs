use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use sheetcheck_quality::{ColumnType, QualityChecker, QualityError};
use sheetcheck_sheet::{from_csv_str, CellValue, Column, CsvOptions, Dataset, ReadOptions, SheetError};
use tempfile::tempdir;

fn two_column_dataset() -> Dataset {
    Dataset::from_rows(
        vec!["A", "B"],
        vec![
            vec![CellValue::Int(1), CellValue::from("x")],
            vec![CellValue::Int(1), CellValue::from("x")],
            vec![CellValue::Null, CellValue::from("y")],
        ],
    )
    .unwrap()
}

fn column_names(ds: &Dataset) -> Vec<String> {
    ds.column_names().map(str::to_string).collect()
}

// ===== Scenario Tests =====

#[test]
fn test_two_column_scenario() {
    let checker = QualityChecker::new(two_column_dataset());
    let report = checker.generate_report();

    assert!((report.null_values["A"] - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(report.null_values["B"], 0.0);

    assert_eq!(report.duplicates.duplicate_rows, 1);
    assert_eq!(report.duplicates.duplicate_values["A"], 1);
    assert_eq!(report.duplicates.duplicate_values["B"], 1);

    assert_eq!(report.data_types["A"], ColumnType::Integer);
    assert_eq!(report.data_types["B"], ColumnType::Text);
}

#[test]
fn test_zero_rows() {
    let ds = Dataset::new(vec![Column::new("A", Vec::<CellValue>::new())]).unwrap();
    let report = QualityChecker::new(ds).generate_report();

    assert_eq!(report.null_values["A"], 0.0);
    assert_eq!(report.duplicates.duplicate_rows, 0);
    assert_eq!(report.duplicates.duplicate_values["A"], 0);
    assert_eq!(report.data_types["A"], ColumnType::Text);
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempdir().unwrap();
    let result = QualityChecker::from_path(dir.path().join("example.xlsx"));

    assert!(matches!(
        result,
        Err(QualityError::Load(SheetError::FileNotFound { .. }))
    ));
}

// ===== Property Tests =====

#[test]
fn test_null_percentage_bounds() {
    let ds = Dataset::from_rows(
        vec!["all", "none", "some"],
        vec![
            vec![CellValue::Null, CellValue::Int(1), CellValue::Null],
            vec![CellValue::Null, CellValue::Int(2), CellValue::from("z")],
            vec![CellValue::Null, CellValue::Int(3), CellValue::from("z")],
            vec![CellValue::Null, CellValue::Int(4), CellValue::from("z")],
        ],
    )
    .unwrap();

    let nulls = QualityChecker::new(ds).check_null_values();

    assert_eq!(nulls["all"], 100.0);
    assert_eq!(nulls["none"], 0.0);
    assert_eq!(nulls["some"], 25.0);
    assert!(nulls.values().all(|pct| (0.0..=100.0).contains(pct)));
}

#[test]
fn test_distinct_rows_have_no_duplicates() {
    let ds = Dataset::from_rows(
        vec!["a", "b"],
        vec![vec![1, 1], vec![1, 2], vec![2, 1], vec![2, 2]],
    )
    .unwrap();

    let dups = QualityChecker::new(ds).check_duplicates();

    assert_eq!(dups.duplicate_rows, 0);
    // Each column repeats, even though no full row does
    assert_eq!(dups.duplicate_values["a"], 2);
    assert_eq!(dups.duplicate_values["b"], 2);
}

#[test]
fn test_duplicate_counts_exclude_first_occurrence() {
    let ds = Dataset::from_rows(
        vec!["v"],
        vec![vec!["a"], vec!["a"], vec!["a"], vec!["b"], vec!["b"]],
    )
    .unwrap();

    let dups = QualityChecker::new(ds).check_duplicates();

    // 5 rows, 2 distinct values
    assert_eq!(dups.duplicate_rows, 3);
    assert_eq!(dups.duplicate_values["v"], 3);
}

#[test]
fn test_nulls_compare_equal_for_duplicates() {
    let ds = Dataset::from_rows(
        vec!["a", "b"],
        vec![
            vec![CellValue::Null, CellValue::Null],
            vec![CellValue::Null, CellValue::Null],
            vec![CellValue::Int(1), CellValue::Null],
        ],
    )
    .unwrap();

    let dups = QualityChecker::new(ds).check_duplicates();

    assert_eq!(dups.duplicate_rows, 1);
    assert_eq!(dups.duplicate_values["a"], 1);
    assert_eq!(dups.duplicate_values["b"], 2);
}

#[test]
fn test_all_rows_identical() {
    let ds = Dataset::from_rows(vec!["a"], vec![vec![7]; 4]).unwrap();
    let dups = QualityChecker::new(ds).check_duplicates();
    assert_eq!(dups.duplicate_rows, 3);
}

#[test]
fn test_generate_report_is_idempotent() {
    let checker = QualityChecker::new(two_column_dataset());
    assert_eq!(checker.generate_report(), checker.generate_report());
}

#[test]
fn test_report_keys_follow_column_order() {
    let ds = Dataset::from_rows(
        vec!["zeta", "alpha", "mid"],
        vec![vec![CellValue::Int(1), CellValue::from("a"), CellValue::Bool(true)]],
    )
    .unwrap();
    let expected = column_names(&ds);

    let report = QualityChecker::new(ds).generate_report();

    assert_eq!(report.null_values.keys().cloned().collect::<Vec<_>>(), expected);
    assert_eq!(
        report.duplicates.duplicate_values.keys().cloned().collect::<Vec<_>>(),
        expected
    );
    assert_eq!(report.data_types.keys().cloned().collect::<Vec<_>>(), expected);
}

#[test]
fn test_data_types_per_column() {
    let jan = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let ds = Dataset::new(vec![
        Column::new("int", vec![CellValue::Int(1), CellValue::Null]),
        Column::new("float", vec![CellValue::Int(1), CellValue::Float(0.5)]),
        Column::new("bool", vec![CellValue::Bool(true), CellValue::Bool(false)]),
        Column::new("date", vec![CellValue::DateTime(jan), CellValue::Null]),
        Column::new("text", vec![CellValue::from("a"), CellValue::from("1")]),
        Column::new("mixed", vec![CellValue::Int(1), CellValue::from("a")]),
        Column::new("empty", vec![CellValue::Null, CellValue::Null]),
    ])
    .unwrap();

    let types = QualityChecker::new(ds).check_data_types();
    let labels: Vec<&str> = types.values().map(|t| t.label()).collect();

    assert_eq!(
        labels,
        vec!["integer", "float", "boolean", "datetime", "text", "mixed", "text"]
    );
}

// ===== File-backed Tests =====

#[test]
fn test_report_from_xlsx() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("example.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "id").unwrap();
    sheet.write_string(0, 1, "city").unwrap();
    sheet.write_string(0, 2, "score").unwrap();
    let rows: [(f64, &str, f64); 3] = [(1.0, "NYC", 3.5), (2.0, "LA", 4.0), (2.0, "LA", 4.0)];
    for (i, (id, city, score)) in rows.iter().enumerate() {
        let r = i as u32 + 1;
        sheet.write_number(r, 0, *id).unwrap();
        sheet.write_string(r, 1, *city).unwrap();
        sheet.write_number(r, 2, *score).unwrap();
    }
    sheet.write_number(4, 0, 3.0).unwrap();
    // city and score left blank on the last row
    workbook.save(&path).unwrap();

    let checker = QualityChecker::from_path(&path).unwrap();
    assert_eq!(checker.dataset().row_count(), 4);

    let report = checker.generate_report();

    assert_eq!(report.null_values["id"], 0.0);
    assert_eq!(report.null_values["city"], 25.0);
    assert_eq!(report.duplicates.duplicate_rows, 1);
    assert_eq!(report.duplicates.duplicate_values["id"], 1);
    assert_eq!(report.duplicates.duplicate_values["score"], 1);
    assert_eq!(report.data_types["id"], ColumnType::Integer);
    assert_eq!(report.data_types["city"], ColumnType::Text);
    // 3.5 and the whole 4.0 together read as floats
    assert_eq!(report.data_types["score"], ColumnType::Float);
}

#[test]
fn test_report_from_csv_with_options() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::write(&path, "1,x\n1,x\n-,y\n").unwrap();

    let options = ReadOptions::default()
        .with_headers(false)
        .with_na_values(["-"]);
    let report = QualityChecker::from_path_with_options(&path, &options)
        .unwrap()
        .generate_report();

    assert_eq!(report.null_values.keys().collect::<Vec<_>>(), vec!["0", "1"]);
    assert_eq!(report.duplicates.duplicate_rows, 1);
    assert_eq!(report.data_types["0"], ColumnType::Integer);
}

#[test]
fn test_nan_counts_as_null() {
    let ds = from_csv_str("x\nNAN\n1.5\n", &CsvOptions::default(), &ReadOptions::default()).unwrap();
    let report = QualityChecker::new(ds).generate_report();

    assert_eq!(report.null_values["x"], 50.0);
    assert_eq!(report.data_types["x"], ColumnType::Float);
}

#[test]
fn test_nan_float_cells_count_as_null() {
    let ds = Dataset::new(vec![Column::new(
        "x",
        vec![CellValue::Float(f64::NAN), CellValue::Null, CellValue::Float(2.5)],
    )])
    .unwrap();
    let report = QualityChecker::new(ds).generate_report();

    assert!((report.null_values["x"] - 200.0 / 3.0).abs() < 1e-9);
    // NaN and null are the same missing value
    assert_eq!(report.duplicates.duplicate_values["x"], 1);
    assert_eq!(report.data_types["x"], ColumnType::Float);
}

#[test]
fn test_yes_no_column_is_text() {
    let ds = from_csv_str("answer\nyes\nno\nmaybe\n", &CsvOptions::default(), &ReadOptions::default())
        .unwrap();
    let report = QualityChecker::new(ds).generate_report();

    assert_eq!(report.data_types["answer"], ColumnType::Text);
}

#[test]
fn test_report_serializes_to_json() {
    let report = QualityChecker::new(two_column_dataset()).generate_report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["duplicates"]["duplicate_rows"], 1);
    assert_eq!(json["data_types"]["A"], "integer");
    assert_eq!(json["null_values"]["B"], 0.0);
}
