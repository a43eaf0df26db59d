//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard integration tests.

#![allow(dead_code)]

use app_lib::{create_app_state, AppConfig, AppState};
use chrono::NaiveDate;
use engine::{Dataset, Region};
use report_engine::FilterSelection;

/// Test harness for creating and managing test state.
pub struct TestHarness {
    pub state: AppState,
    /// Keeps the export directory alive for the harness lifetime.
    pub export_dir: tempfile::TempDir,
}

impl TestHarness {
    /// Harness over the standard 120-order dataset.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Harness for a custom config; the export directory is always a temp dir.
    pub fn with_config(mut config: AppConfig) -> Self {
        let export_dir = tempfile::tempdir().unwrap();
        config.export_dir = export_dir.path().to_path_buf();
        TestHarness {
            state: create_app_state(&config).unwrap(),
            export_dir,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.state.dataset
    }

    pub fn full_selection(&self) -> FilterSelection {
        FilterSelection::all(self.dataset())
    }

    pub fn selection(&self) -> FilterSelection {
        self.state.selection.lock().unwrap().clone()
    }

    /// Number of base rows in `region`.
    pub fn count_in_region(&self, region: Region) -> usize {
        self.dataset().iter().filter(|o| o.region == region).count()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Relative float comparison for summed money values.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0)
}
