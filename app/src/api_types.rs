//! FILENAME: app/src/api_types.rs
// PURPOSE: Request/response types exchanged with the presentation layer.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request to change the filter selection.
/// Fields left as None keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFiltersRequest {
    /// Region names, e.g. ["North", "East"]
    pub regions: Option<Vec<String>>,
    /// Category names, e.g. ["Sports"]
    pub categories: Option<Vec<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Result of saving an export to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedExport {
    pub path: PathBuf,
    pub row_count: usize,
    pub byte_count: usize,
}
