//! FILENAME: core/report-engine/src/definition.rs
//! Filter Definition - The user's current filter selection.
//!
//! These structures DESCRIBE which orders a report covers. They are:
//! - Serializable (sent to and from the presentation layer)
//! - Created fresh on every filter change
//! - Consumed immediately by the filter engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use engine::{Category, Dataset, Region};

/// Selected regions. Never more than the four fixed values.
pub type RegionSet = SmallVec<[Region; 4]>;

/// Selected categories. Never more than the four fixed values.
pub type CategorySet = SmallVec<[Category; 4]>;

// ============================================================================
// DATE RANGE
// ============================================================================

/// Inclusive date interval. An inverted interval (start > end) matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

// ============================================================================
// FILTER SELECTION
// ============================================================================

/// The current filter state: which regions, categories, and dates to include.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub regions: RegionSet,
    pub categories: CategorySet,
    pub date_range: DateRange,
}

impl FilterSelection {
    pub fn new(regions: RegionSet, categories: CategorySet, date_range: DateRange) -> Self {
        FilterSelection {
            regions,
            categories,
            date_range,
        }
    }

    /// The default selection: every option offered for `dataset`.
    pub fn all(dataset: &Dataset) -> Self {
        FilterOptions::from_dataset(dataset).default_selection()
    }

    pub fn with_regions<I: IntoIterator<Item = Region>>(mut self, regions: I) -> Self {
        self.regions = regions.into_iter().collect();
        self
    }

    pub fn with_categories<I: IntoIterator<Item = Category>>(mut self, categories: I) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = DateRange::new(start, end);
        self
    }

    /// True when no order can possibly match.
    pub fn is_unsatisfiable(&self) -> bool {
        self.regions.is_empty() || self.categories.is_empty() || self.date_range.is_inverted()
    }
}

// ============================================================================
// FILTER OPTIONS
// ============================================================================

/// The values offered by the filter inputs for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct regions in order of first appearance.
    pub regions: Vec<Region>,
    /// Distinct categories in order of first appearance.
    pub categories: Vec<Category>,
    /// Earliest order date (default picker start).
    pub min_date: Option<NaiveDate>,
    /// Latest order date (default picker end).
    pub max_date: Option<NaiveDate>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let bounds = dataset.date_bounds();
        FilterOptions {
            regions: dataset.distinct_regions(),
            categories: dataset.distinct_categories(),
            min_date: bounds.map(|(min, _)| min),
            max_date: bounds.map(|(_, max)| max),
        }
    }

    /// Everything selected, full date interval.
    pub fn default_selection(&self) -> FilterSelection {
        let start = self.min_date.unwrap_or_default();
        let end = self.max_date.unwrap_or(start);
        FilterSelection {
            regions: self.regions.iter().copied().collect(),
            categories: self.categories.iter().copied().collect(),
            date_range: DateRange::new(start, end),
        }
    }
}
