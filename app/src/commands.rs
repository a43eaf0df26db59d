//! FILENAME: app/src/commands.rs
// PURPOSE: Command handlers invoked by the presentation layer.
// CONTEXT: Every filter change recomputes the dashboard from scratch against
//          the immutable base dataset held in AppState.

use std::path::PathBuf;

use engine::{Category, Region};
use persistence::{
    export_orders_csv, export_orders_xlsx, save_orders_csv, save_orders_xlsx, ExportedFile,
    CSV_FILE_NAME, XLSX_FILE_NAME,
};
use report_engine::{apply_filter, calculate_dashboard, DashboardView, FilterOptions, FilterSelection};

use crate::api_types::{SavedExport, UpdateFiltersRequest};
use crate::{log_debug, log_enter, log_exit, log_info};
use crate::AppState;

fn current_selection(state: &AppState) -> Result<FilterSelection, String> {
    state
        .selection
        .lock()
        .map(|guard| guard.clone())
        .map_err(|e| format!("Lock error: {}", e))
}

fn store_selection(state: &AppState, selection: FilterSelection) -> Result<(), String> {
    let mut guard = state
        .selection
        .lock()
        .map_err(|e| format!("Lock error: {}", e))?;
    *guard = selection;
    Ok(())
}

// ============================================================================
// FILTERS
// ============================================================================

/// Options offered by the Region / Category multiselects and the date picker.
pub fn get_filter_options(state: &AppState) -> FilterOptions {
    state.options.clone()
}

pub fn get_filter_selection(state: &AppState) -> Result<FilterSelection, String> {
    current_selection(state)
}

/// Replaces the whole selection and returns the recomputed dashboard.
pub fn set_filter_selection(
    state: &AppState,
    selection: FilterSelection,
) -> Result<DashboardView, String> {
    log_enter!(
        "CMD",
        "set_filter_selection",
        "regions={} categories={} range={}..={}",
        selection.regions.len(),
        selection.categories.len(),
        selection.date_range.start,
        selection.date_range.end
    );
    store_selection(state, selection)?;
    let view = get_dashboard(state)?;
    log_exit!("CMD", "set_filter_selection", "orders={}", view.order_count());
    Ok(view)
}

/// Applies a partial update by name. Unknown names are rejected.
pub fn update_filters(
    state: &AppState,
    request: UpdateFiltersRequest,
) -> Result<DashboardView, String> {
    let mut selection = current_selection(state)?;

    if let Some(names) = request.regions {
        let regions = names
            .iter()
            .map(|n| n.parse::<Region>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        selection = selection.with_regions(regions);
    }
    if let Some(names) = request.categories {
        let categories = names
            .iter()
            .map(|n| n.parse::<Category>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| e.to_string())?;
        selection = selection.with_categories(categories);
    }
    let start = request.start_date.unwrap_or(selection.date_range.start);
    let end = request.end_date.unwrap_or(selection.date_range.end);
    selection = selection.with_date_range(start, end);

    set_filter_selection(state, selection)
}

/// Restores the full default selection.
pub fn reset_filters(state: &AppState) -> Result<DashboardView, String> {
    log_info!("CMD", "reset_filters");
    set_filter_selection(state, state.options.default_selection())
}

// ============================================================================
// DASHBOARD
// ============================================================================

pub fn get_dashboard(state: &AppState) -> Result<DashboardView, String> {
    let selection = current_selection(state)?;
    let view = calculate_dashboard(&state.dataset, &selection);
    log_debug!(
        "CMD",
        "get_dashboard orders={} months={}",
        view.order_count(),
        view.trend_chart.points.len()
    );
    Ok(view)
}

// ============================================================================
// EXPORT
// ============================================================================

/// Builds the CSV download of the currently filtered orders.
/// Rows keep dataset order (not the table's newest-first order).
pub fn export_filtered_csv(state: &AppState) -> Result<ExportedFile, String> {
    let selection = current_selection(state)?;
    let view = apply_filter(&state.dataset, &selection);
    export_orders_csv(view.iter()).map_err(|e| e.to_string())
}

pub fn export_filtered_xlsx(state: &AppState) -> Result<ExportedFile, String> {
    let selection = current_selection(state)?;
    let view = apply_filter(&state.dataset, &selection);
    export_orders_xlsx(view.iter()).map_err(|e| e.to_string())
}

/// Export path for `file_name`, creating the export directory when missing.
fn export_path(state: &AppState, file_name: &str) -> Result<PathBuf, String> {
    std::fs::create_dir_all(&state.export_dir)
        .map_err(|e| format!("Failed to create {:?}: {}", state.export_dir, e))?;
    Ok(state.export_dir.join(file_name))
}

fn saved_export(path: PathBuf, row_count: usize) -> Result<SavedExport, String> {
    let byte_count = std::fs::metadata(&path)
        .map_err(|e| format!("Failed to stat {:?}: {}", path, e))?
        .len() as usize;
    log_info!("CMD", "saved {} rows to {}", row_count, path.display());
    Ok(SavedExport {
        path,
        row_count,
        byte_count,
    })
}

/// Saves `filtered_orders.csv` into the export directory.
pub fn save_filtered_csv(state: &AppState) -> Result<SavedExport, String> {
    log_enter!("CMD", "save_filtered_csv", "file={}", CSV_FILE_NAME);
    let selection = current_selection(state)?;
    let view = apply_filter(&state.dataset, &selection);
    let path = export_path(state, CSV_FILE_NAME)?;
    save_orders_csv(view.iter(), &path).map_err(|e| e.to_string())?;
    saved_export(path, view.len())
}

/// Saves `filtered_orders.xlsx` into the export directory.
pub fn save_filtered_xlsx(state: &AppState) -> Result<SavedExport, String> {
    log_enter!("CMD", "save_filtered_xlsx", "file={}", XLSX_FILE_NAME);
    let selection = current_selection(state)?;
    let view = apply_filter(&state.dataset, &selection);
    let path = export_path(state, XLSX_FILE_NAME)?;
    save_orders_xlsx(view.iter(), &path).map_err(|e| e.to_string())?;
    saved_export(path, view.len())
}
