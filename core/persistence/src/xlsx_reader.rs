// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::xlsx_writer::ORDERS_SHEET_NAME;
use crate::PersistenceError;
use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use engine::{Category, Order, Region, ORDER_COLUMNS};
use std::path::Path;

pub fn load_orders_xlsx(path: &Path) -> Result<Vec<Order>, PersistenceError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    if !workbook.sheet_names().iter().any(|n| n == ORDERS_SHEET_NAME) {
        return Err(PersistenceError::InvalidFormat(format!(
            "Workbook has no '{}' sheet",
            ORDERS_SHEET_NAME
        )));
    }

    let range = workbook
        .worksheet_range(ORDERS_SHEET_NAME)
        .map_err(|e| PersistenceError::InvalidFormat(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| PersistenceError::InvalidFormat("Sheet is empty".to_string()))?;
    let header_ok = header.len() == ORDER_COLUMNS.len()
        && header
            .iter()
            .zip(ORDER_COLUMNS.iter())
            .all(|(cell, name)| matches!(cell, Data::String(s) if s == name));
    if !header_ok {
        return Err(PersistenceError::InvalidFormat(
            "Unexpected header row".to_string(),
        ));
    }

    let mut orders = Vec::new();
    for (row_idx, row) in rows.enumerate() {
        if row.iter().all(|c| matches!(c, Data::Empty)) {
            continue;
        }
        orders.push(parse_row(row_idx + 1, row)?);
    }
    Ok(orders)
}

fn parse_row(row_idx: usize, row: &[Data]) -> Result<Order, PersistenceError> {
    let date_text = text(row_idx, row, 1)?;
    let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|e| {
        PersistenceError::InvalidFormat(format!("Row {}: bad date '{}': {}", row_idx, date_text, e))
    })?;

    Ok(Order {
        order_id: integer(row_idx, row, 0)?,
        date,
        region: text(row_idx, row, 2)?.parse::<Region>()?,
        category: text(row_idx, row, 3)?.parse::<Category>()?,
        quantity: integer(row_idx, row, 4)?,
        unit_price: number(row_idx, row, 5)?,
        sales: number(row_idx, row, 6)?,
        profit: number(row_idx, row, 7)?,
        profit_margin: number(row_idx, row, 8)?,
    })
}

fn number(row_idx: usize, row: &[Data], col: usize) -> Result<f64, PersistenceError> {
    match row.get(col) {
        Some(Data::Float(f)) => Ok(*f),
        Some(Data::Int(i)) => Ok(*i as f64),
        other => Err(PersistenceError::InvalidFormat(format!(
            "Row {}, column {}: expected a number, found {:?}",
            row_idx, ORDER_COLUMNS[col], other
        ))),
    }
}

fn integer(row_idx: usize, row: &[Data], col: usize) -> Result<u32, PersistenceError> {
    let value = number(row_idx, row, col)?;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(PersistenceError::InvalidFormat(format!(
            "Row {}, column {}: expected a non-negative whole number, found {}",
            row_idx, ORDER_COLUMNS[col], value
        )));
    }
    Ok(value as u32)
}

fn text(row_idx: usize, row: &[Data], col: usize) -> Result<String, PersistenceError> {
    match row.get(col) {
        Some(Data::String(s)) => Ok(s.clone()),
        other => Err(PersistenceError::InvalidFormat(format!(
            "Row {}, column {}: expected text, found {:?}",
            row_idx, ORDER_COLUMNS[col], other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn write_sheet(path: &Path, quantity: f64) {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(ORDERS_SHEET_NAME).unwrap();
        for (col, name) in ORDER_COLUMNS.iter().enumerate() {
            sheet.write_string(0, col as u16, *name).unwrap();
        }
        sheet.write_number(1, 0, 3001.0).unwrap();
        sheet.write_string(1, 1, "2024-01-01").unwrap();
        sheet.write_string(1, 2, "North").unwrap();
        sheet.write_string(1, 3, "Sports").unwrap();
        sheet.write_number(1, 4, quantity).unwrap();
        sheet.write_number(1, 5, 50.0).unwrap();
        sheet.write_number(1, 6, 50.0).unwrap();
        sheet.write_number(1, 7, 12.5).unwrap();
        sheet.write_number(1, 8, 25.0).unwrap();
        workbook.save(path).unwrap();
    }

    #[test]
    fn test_whole_quantity_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.xlsx");
        write_sheet(&path, 3.0);

        let orders = load_orders_xlsx(&path).unwrap();
        assert_eq!(orders[0].quantity, 3);
        assert_eq!(orders[0].order_id, 3001);
    }

    #[test]
    fn test_fractional_and_negative_integers_rejected() {
        let dir = tempfile::tempdir().unwrap();
        for (i, quantity) in [3.7, -1.0, 5.0e10].into_iter().enumerate() {
            let path = dir.path().join(format!("bad_{}.xlsx", i));
            write_sheet(&path, quantity);
            assert!(
                matches!(load_orders_xlsx(&path), Err(PersistenceError::InvalidFormat(_))),
                "quantity {} should be rejected",
                quantity
            );
        }
    }
}
