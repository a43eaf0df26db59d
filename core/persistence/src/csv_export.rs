//! FILENAME: core/persistence/src/csv_export.rs
//! PURPOSE: CSV export of filtered orders (the dashboard's download action).
//! CONTEXT: UTF-8, comma-delimited, header row always present, one record per
//! order in the given order. `read_orders_csv` parses the same layout back.

use std::fs;
use std::path::Path;

use engine::{Order, ORDER_COLUMNS};

use crate::PersistenceError;

pub const CSV_FILE_NAME: &str = "filtered_orders.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// An in-memory file ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Encodes orders as CSV bytes. The header is written even when `orders` is empty.
pub fn orders_to_csv<'a, I>(orders: I) -> Result<Vec<u8>, PersistenceError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(ORDER_COLUMNS)?;
    let mut rows = 0usize;
    for order in orders {
        writer.serialize(order)?;
        rows += 1;
    }
    writer.flush()?;

    let data = writer
        .into_inner()
        .map_err(|e| PersistenceError::Io(e.into_error()))?;
    log::debug!("encoded {} orders as CSV ({} bytes)", rows, data.len());
    Ok(data)
}

/// Builds the `filtered_orders.csv` download.
pub fn export_orders_csv<'a, I>(orders: I) -> Result<ExportedFile, PersistenceError>
where
    I: IntoIterator<Item = &'a Order>,
{
    Ok(ExportedFile {
        file_name: CSV_FILE_NAME.to_string(),
        mime_type: CSV_MIME_TYPE.to_string(),
        data: orders_to_csv(orders)?,
    })
}

/// Writes orders as CSV to `path`.
pub fn save_orders_csv<'a, I>(orders: I, path: &Path) -> Result<(), PersistenceError>
where
    I: IntoIterator<Item = &'a Order>,
{
    let data = orders_to_csv(orders)?;
    fs::write(path, data)?;
    log::info!("saved CSV export to {}", path.display());
    Ok(())
}

/// Parses CSV bytes produced by `orders_to_csv`.
pub fn read_orders_csv(data: &[u8]) -> Result<Vec<Order>, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    if headers.len() != ORDER_COLUMNS.len()
        || headers.iter().zip(ORDER_COLUMNS.iter()).any(|(h, c)| h != *c)
    {
        return Err(PersistenceError::InvalidFormat(format!(
            "unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut orders = Vec::new();
    for record in reader.deserialize() {
        let order: Order = record?;
        orders.push(order);
    }
    Ok(orders)
}

/// Reads a CSV export from `path`.
pub fn load_orders_csv(path: &Path) -> Result<Vec<Order>, PersistenceError> {
    let data = fs::read(path)?;
    read_orders_csv(&data)
}
