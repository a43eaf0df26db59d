//! FILENAME: core/engine/src/dataset.rs
//! PURPOSE: The immutable base dataset every report is computed from.
//! CONTEXT: Built once at startup and only ever lent out by shared reference.
//! Filtering produces borrowed views; nothing mutates the rows after construction.

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::generator::{generate_seeded, GeneratorConfig};
use crate::order::{Category, Order, Region};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    orders: Vec<Order>,
}

impl Dataset {
    pub fn new(orders: Vec<Order>) -> Self {
        Dataset { orders }
    }

    /// Generates the standard 120-order dataset.
    pub fn generate_default() -> Result<Self, EngineError> {
        generate_seeded(&GeneratorConfig::default())
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    /// Earliest and latest order date, or None for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.orders.iter().map(|o| o.date).min()?;
        let max = self.orders.iter().map(|o| o.date).max()?;
        Some((min, max))
    }

    /// Distinct regions in order of first appearance.
    pub fn distinct_regions(&self) -> Vec<Region> {
        let mut seen = Vec::with_capacity(Region::ALL.len());
        for order in &self.orders {
            if !seen.contains(&order.region) {
                seen.push(order.region);
            }
        }
        seen
    }

    /// Distinct categories in order of first appearance.
    pub fn distinct_categories(&self) -> Vec<Category> {
        let mut seen = Vec::with_capacity(Category::ALL.len());
        for order in &self.orders {
            if !seen.contains(&order.category) {
                seen.push(order.category);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_bounds() {
        let dataset = Dataset::generate_default().unwrap();
        let (min, max) = dataset.date_bounds().unwrap();

        assert_eq!(min, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        // 119 weeks after the first order
        assert_eq!(max, NaiveDate::from_ymd_opt(2026, 4, 13).unwrap());
    }

    #[test]
    fn test_distinct_values_in_appearance_order() {
        let dataset = Dataset::generate_default().unwrap();
        let regions = dataset.distinct_regions();
        let categories = dataset.distinct_categories();

        assert_eq!(regions[0], dataset.orders()[0].region);
        assert_eq!(categories[0], dataset.orders()[0].category);
        // 120 uniform draws over 4 values cover the whole set
        assert_eq!(regions.len(), 4);
        assert_eq!(categories.len(), 4);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.date_bounds(), None);
        assert!(dataset.distinct_regions().is_empty());
    }
}
