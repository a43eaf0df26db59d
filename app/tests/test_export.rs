//! FILENAME: tests/test_export.rs
//! Integration tests for the CSV / XLSX download actions.

mod common;

use app_lib::commands;
use common::TestHarness;
use engine::{Category, Region};
use persistence::{load_orders_xlsx, read_orders_csv, CSV_FILE_NAME, CSV_MIME_TYPE};
use report_engine::apply_filter;

#[test]
fn test_csv_download_metadata() {
    let harness = TestHarness::new();
    let file = commands::export_filtered_csv(&harness.state).unwrap();

    assert_eq!(file.file_name, "filtered_orders.csv");
    assert_eq!(file.mime_type, "text/csv");
    assert_eq!(CSV_FILE_NAME, file.file_name);
    assert_eq!(CSV_MIME_TYPE, file.mime_type);

    let text = String::from_utf8(file.data).unwrap();
    assert!(text.starts_with("OrderID,Date,Region,Category,Quantity,UnitPrice,Sales,Profit,ProfitMargin\n"));
}

#[test]
fn test_csv_row_count_matches_filtered_count() {
    let harness = TestHarness::new();
    let selection = harness.full_selection().with_regions([Region::North]);
    let view = commands::set_filter_selection(&harness.state, selection).unwrap();

    let file = commands::export_filtered_csv(&harness.state).unwrap();
    let text = String::from_utf8(file.data).unwrap();

    assert_eq!(text.lines().count(), view.order_count() + 1);
}

#[test]
fn test_csv_round_trip_reconstructs_filtered_rows() {
    let harness = TestHarness::new();
    let selection = harness
        .full_selection()
        .with_categories([Category::Furniture, Category::Clothing]);
    commands::set_filter_selection(&harness.state, selection.clone()).unwrap();

    let file = commands::export_filtered_csv(&harness.state).unwrap();
    let parsed = read_orders_csv(&file.data).unwrap();

    let expected = apply_filter(harness.dataset(), &selection).to_orders();
    assert_eq!(parsed, expected);
}

#[test]
fn test_empty_export_has_header_only() {
    let harness = TestHarness::new();
    commands::set_filter_selection(&harness.state, harness.full_selection().with_categories(Vec::new())).unwrap();

    let file = commands::export_filtered_csv(&harness.state).unwrap();
    assert!(read_orders_csv(&file.data).unwrap().is_empty());
    assert_eq!(String::from_utf8(file.data).unwrap().lines().count(), 1);
}

#[test]
fn test_save_filtered_csv_to_export_dir() {
    let harness = TestHarness::new();
    let saved = commands::save_filtered_csv(&harness.state).unwrap();

    assert_eq!(saved.path, harness.export_dir.path().join("filtered_orders.csv"));
    assert_eq!(saved.row_count, 120);

    let data = std::fs::read(&saved.path).unwrap();
    assert_eq!(data.len(), saved.byte_count);
    assert_eq!(read_orders_csv(&data).unwrap(), harness.dataset().orders());
}

#[test]
fn test_save_filtered_xlsx_round_trip() {
    let harness = TestHarness::new();
    let selection = harness.full_selection().with_regions([Region::South]);
    commands::set_filter_selection(&harness.state, selection.clone()).unwrap();

    let saved = commands::save_filtered_xlsx(&harness.state).unwrap();
    let loaded = load_orders_xlsx(&saved.path).unwrap();

    assert_eq!(loaded.len(), saved.row_count);
    assert_eq!(loaded, apply_filter(harness.dataset(), &selection).to_orders());
}

#[test]
fn test_saved_csv_matches_download_bytes() {
    let harness = TestHarness::new();
    let selection = harness.full_selection().with_regions([Region::East, Region::West]);
    let view = commands::set_filter_selection(&harness.state, selection).unwrap();

    let download = commands::export_filtered_csv(&harness.state).unwrap();
    let saved = commands::save_filtered_csv(&harness.state).unwrap();

    assert_eq!(saved.row_count, view.order_count());
    assert_eq!(saved.byte_count, download.data.len());
    assert_eq!(std::fs::read(&saved.path).unwrap(), download.data);
}

#[test]
fn test_save_creates_missing_export_dir() {
    let mut harness = TestHarness::new();
    let nested = harness.export_dir.path().join("reports").join("2024");
    harness.state.export_dir = nested.clone();

    let saved = commands::save_filtered_xlsx(&harness.state).unwrap();

    assert_eq!(saved.path, nested.join("filtered_orders.xlsx"));
    assert_eq!(saved.row_count, 120);
    assert_eq!(std::fs::metadata(&saved.path).unwrap().len() as usize, saved.byte_count);
}
