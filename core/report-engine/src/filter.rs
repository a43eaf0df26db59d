//! FILENAME: core/report-engine/src/filter.rs
//! Filter Engine - Selects the orders a report covers.
//!
//! The engine is a pure function of (dataset, selection). The result borrows
//! rows from the dataset and keeps their original order.

use engine::{Dataset, Order};

use crate::definition::FilterSelection;

/// A borrowed, order-preserving subset of the base dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    orders: Vec<&'a Order>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Order> + '_ {
        self.orders.iter().copied()
    }

    pub fn orders(&self) -> &[&'a Order] {
        &self.orders
    }

    /// Rows sorted newest first. Equal dates keep their dataset order.
    pub fn sorted_by_date_desc(&self) -> Vec<&'a Order> {
        let mut rows = self.orders.clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    /// Owned copies of the rows, for export.
    pub fn to_orders(&self) -> Vec<Order> {
        self.orders.iter().map(|o| (*o).clone()).collect()
    }
}

/// Returns true if `order` passes every predicate of `selection`.
pub fn matches(order: &Order, selection: &FilterSelection) -> bool {
    selection.regions.contains(&order.region)
        && selection.categories.contains(&order.category)
        && selection.date_range.contains(order.date)
}

/// Applies `selection` to `dataset`.
pub fn apply_filter<'a>(dataset: &'a Dataset, selection: &FilterSelection) -> FilteredView<'a> {
    if selection.is_unsatisfiable() {
        return FilteredView { orders: Vec::new() };
    }

    FilteredView {
        orders: dataset.iter().filter(|o| matches(o, selection)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use engine::{Category, Region};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::generate_default().unwrap()
    }

    #[test]
    fn test_full_selection_returns_everything() {
        let data = dataset();
        let view = apply_filter(&data, &FilterSelection::all(&data));

        assert_eq!(view.len(), 120);
        assert_eq!(view.to_orders(), data.orders());
    }

    #[test]
    fn test_region_filter() {
        let data = dataset();
        let selection = FilterSelection::all(&data).with_regions([Region::North]);
        let view = apply_filter(&data, &selection);

        let expected = data.iter().filter(|o| o.region == Region::North).count();
        assert_eq!(view.len(), expected);
        assert!(view.iter().all(|o| o.region == Region::North));
    }

    #[test]
    fn test_result_is_ordered_subset() {
        let data = dataset();
        let selection = FilterSelection::all(&data)
            .with_regions([Region::East, Region::West])
            .with_categories([Category::Clothing, Category::Sports])
            .with_date_range(date(2024, 6, 1), date(2025, 6, 1));
        let view = apply_filter(&data, &selection);

        for pair in view.orders().windows(2) {
            assert!(pair[0].order_id < pair[1].order_id);
        }
        for order in view.iter() {
            assert!(data.orders().contains(order));
            assert!(order.date >= date(2024, 6, 1) && order.date <= date(2025, 6, 1));
        }
    }

    #[test]
    fn test_empty_sets_yield_nothing() {
        let data = dataset();

        let no_regions = FilterSelection::all(&data).with_regions(Vec::new());
        assert!(apply_filter(&data, &no_regions).is_empty());

        let no_categories = FilterSelection::all(&data).with_categories(Vec::new());
        assert!(apply_filter(&data, &no_categories).is_empty());
    }

    #[test]
    fn test_inverted_and_narrow_ranges() {
        let data = dataset();

        let inverted = FilterSelection::all(&data).with_date_range(date(2025, 1, 1), date(2024, 1, 1));
        assert!(apply_filter(&data, &inverted).is_empty());

        // Between two weekly orders
        let narrow = FilterSelection::all(&data).with_date_range(date(2024, 1, 2), date(2024, 1, 7));
        assert!(apply_filter(&data, &narrow).is_empty());

        let single_day = FilterSelection::all(&data).with_date_range(date(2024, 1, 8), date(2024, 1, 8));
        let view = apply_filter(&data, &single_day);
        assert_eq!(view.len(), 1);
        assert_eq!(view.orders()[0].order_id, 3002);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = dataset();
        let selection = FilterSelection::all(&data).with_categories([Category::Electronics]);

        assert_eq!(apply_filter(&data, &selection), apply_filter(&data, &selection));
    }

    #[test]
    fn test_sorted_by_date_desc() {
        let data = dataset();
        let view = apply_filter(&data, &FilterSelection::all(&data));
        let sorted = view.sorted_by_date_desc();

        assert_eq!(sorted[0].order_id, 3120);
        assert_eq!(sorted[119].order_id, 3001);
        assert_eq!(view.orders()[0].order_id, 3001);
    }
}
