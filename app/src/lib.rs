//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point (dashboard application).
// CONTEXT: Owns the immutable base dataset and the current filter selection.
//          The binary and the integration tests drive it through `commands`.

use std::path::PathBuf;
use std::sync::Mutex;

use engine::{generate_seeded, Dataset};
use report_engine::{FilterOptions, FilterSelection};

pub mod api_types;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;

pub use api_types::{SavedExport, UpdateFiltersRequest};
pub use config::{AppConfig, SelectionConfig, CONFIG_ENV_VAR};
pub use error::AppError;
pub use logging::{init_log_file, get_log_path, next_seq, write_log};

pub struct AppState {
    /// Base dataset, generated once at startup and never mutated
    pub dataset: Dataset,
    /// Filter input options derived from the dataset
    pub options: FilterOptions,
    /// Current filter selection
    pub selection: Mutex<FilterSelection>,
    /// Directory the download action saves into
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(dataset: Dataset, export_dir: PathBuf) -> Self {
        let options = FilterOptions::from_dataset(&dataset);
        let selection = options.default_selection();
        AppState {
            dataset,
            options,
            selection: Mutex::new(selection),
            export_dir,
        }
    }
}

/// Generates the dataset described by `config` and applies its initial selection.
/// Invalid generator parameters are fatal.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, AppError> {
    log_info!(
        "SYS",
        "Creating AppState orders={} seed_phrase={}",
        config.generator.order_count,
        config.generator.seed_phrase
    );
    let dataset = generate_seeded(&config.generator)?;
    let state = AppState::new(dataset, config.export_dir.clone());

    if let Some(initial) = &config.initial_selection {
        let selection = initial.to_selection(&state.options)?;
        let mut guard = state
            .selection
            .lock()
            .map_err(|e| AppError::Config(format!("Lock error: {}", e)))?;
        *guard = selection;
    }

    log_info!("SYS", "Dataset ready rows={}", state.dataset.len());
    Ok(state)
}

/// Startup sequence: config, logging, dataset, first render, CSV export.
pub fn run() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;

    let log_path = config
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(logging::DEFAULT_LOG_PATH));
    match init_log_file(&log_path) {
        Ok(path) => {
            log_info!("SYS", "InsightTrack starting, log={}", path.display());
        }
        Err(e) => {
            eprintln!("[LOG_INIT] FAILED: {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
        }
    }
    logging::install_log_bridge(log::LevelFilter::Info);

    let state = create_app_state(&config)?;

    let view = commands::get_dashboard(&state).map_err(AppError::Command)?;
    println!("{}", render::render_dashboard(&view));

    let saved = commands::save_filtered_csv(&state).map_err(AppError::Command)?;
    println!(
        "Download: {} ({} rows, {} bytes)",
        saved.path.display(),
        saved.row_count,
        saved.byte_count
    );

    log_info!("SYS", "InsightTrack finished");
    Ok(())
}
