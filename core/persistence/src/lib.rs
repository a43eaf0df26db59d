//! FILENAME: core/persistence/src/lib.rs
//! InsightTrack Persistence Module
//!
//! Exports filtered orders as CSV (the download action) or XLSX, and reads
//! both formats back.

mod csv_export;
mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use csv_export::{
    export_orders_csv, load_orders_csv, orders_to_csv, read_orders_csv, save_orders_csv,
    ExportedFile, CSV_FILE_NAME, CSV_MIME_TYPE,
};
pub use error::PersistenceError;
pub use xlsx_reader::load_orders_xlsx;
pub use xlsx_writer::{orders_to_xlsx, save_orders_xlsx, ORDERS_SHEET_NAME};

pub const XLSX_FILE_NAME: &str = "filtered_orders.xlsx";
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Builds the XLSX variant of the download.
pub fn export_orders_xlsx<'a, I>(orders: I) -> Result<ExportedFile, PersistenceError>
where
    I: IntoIterator<Item = &'a engine::Order>,
{
    Ok(ExportedFile {
        file_name: XLSX_FILE_NAME.to_string(),
        mime_type: XLSX_MIME_TYPE.to_string(),
        data: orders_to_xlsx(orders)?,
    })
}
