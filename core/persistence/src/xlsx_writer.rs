//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::PersistenceError;
use engine::{Order, ORDER_COLUMNS};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

pub const ORDERS_SHEET_NAME: &str = "Filtered Orders";

fn build_workbook<'a, I>(orders: I) -> Result<Workbook, PersistenceError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(ORDERS_SHEET_NAME)?;

    let header = Format::new().set_bold();
    for (col, name) in ORDER_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    let money = Format::new().set_num_format("#,##0.00");
    for (i, order) in orders.into_iter().enumerate() {
        write_order(worksheet, (i + 1) as u32, order, &money)?;
    }

    // Date column fits "YYYY-MM-DD"
    worksheet.set_column_width(1, 12)?;

    Ok(workbook)
}

fn write_order(
    worksheet: &mut Worksheet,
    row: u32,
    order: &Order,
    money: &Format,
) -> Result<(), PersistenceError> {
    worksheet.write_number(row, 0, order.order_id as f64)?;
    worksheet.write_string(row, 1, order.date.format("%Y-%m-%d").to_string())?;
    worksheet.write_string(row, 2, order.region.as_str())?;
    worksheet.write_string(row, 3, order.category.as_str())?;
    worksheet.write_number(row, 4, order.quantity as f64)?;
    worksheet.write_number_with_format(row, 5, order.unit_price, money)?;
    worksheet.write_number_with_format(row, 6, order.sales, money)?;
    worksheet.write_number_with_format(row, 7, order.profit, money)?;
    worksheet.write_number(row, 8, order.profit_margin)?;
    Ok(())
}

/// Writes orders to a single-sheet XLSX workbook at `path`.
pub fn save_orders_xlsx<'a, I>(orders: I, path: &Path) -> Result<(), PersistenceError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut workbook = build_workbook(orders)?;
    workbook.save(path)?;
    log::info!("saved XLSX export to {}", path.display());
    Ok(())
}

/// Encodes orders as XLSX bytes.
pub fn orders_to_xlsx<'a, I>(orders: I) -> Result<Vec<u8>, PersistenceError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut workbook = build_workbook(orders)?;
    Ok(workbook.save_to_buffer()?)
}
