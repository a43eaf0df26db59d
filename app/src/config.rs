//! FILENAME: app/src/config.rs
//! PURPOSE: Application configuration loaded at startup.
//! CONTEXT: Read from the JSON file named by `INSIGHTTRACK_CONFIG`. Every field
//! has a default, so an absent variable or a partial file is fine; an unreadable
//! or malformed file stops startup.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use engine::{Category, GeneratorConfig, Region};
use report_engine::{FilterOptions, FilterSelection};

use crate::error::AppError;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "INSIGHTTRACK_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    /// Filters applied when the dashboard first opens (None = everything).
    pub initial_selection: Option<SelectionConfig>,
    /// Directory the download action saves into.
    pub export_dir: PathBuf,
    /// Log file path (None = logs/insighttrack.log).
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            generator: GeneratorConfig::default(),
            initial_selection: None,
            export_dir: PathBuf::from("."),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    /// Loads the file named by `INSIGHTTRACK_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, AppError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}

/// Filter selection by name, as written in the config file.
/// Absent fields fall back to the full default selection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub regions: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl SelectionConfig {
    /// Resolves names against the dataset's filter options.
    /// Unknown names are errors.
    pub fn to_selection(&self, options: &FilterOptions) -> Result<FilterSelection, AppError> {
        let mut selection = options.default_selection();

        if let Some(names) = &self.regions {
            let regions = names
                .iter()
                .map(|n| n.parse::<Region>())
                .collect::<Result<Vec<_>, _>>()?;
            selection = selection.with_regions(regions);
        }
        if let Some(names) = &self.categories {
            let categories = names
                .iter()
                .map(|n| n.parse::<Category>())
                .collect::<Result<Vec<_>, _>>()?;
            selection = selection.with_categories(categories);
        }

        let start = self.start_date.unwrap_or(selection.date_range.start);
        let end = self.end_date.unwrap_or(selection.date_range.end);
        Ok(selection.with_date_range(start, end))
    }
}
