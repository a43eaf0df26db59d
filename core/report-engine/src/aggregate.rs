//! FILENAME: core/report-engine/src/aggregate.rs
//! Aggregator - Totals, means and group-by sums over a filtered view.
//!
//! Every function accepts an empty view and returns zero / empty results.
//! Group-by results contain only groups present in the view, ordered by
//! label (alphabetically); monthly results are chronological.

use chrono::{Datelike, NaiveDate};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use engine::{Category, Order, Region};

use crate::filter::FilteredView;

// ============================================================================
// SUMMARY
// ============================================================================

/// Headline metrics of a filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub total_sales: f64,
    pub total_profit: f64,
    pub order_count: usize,
    /// Mean sales per order; 0 when there are no orders.
    pub average_order_value: f64,
}

impl Summary {
    pub fn from_view(view: &FilteredView<'_>) -> Self {
        let mut total_sales = 0.0;
        let mut total_profit = 0.0;
        for order in view.iter() {
            total_sales += order.sales;
            total_profit += order.profit;
        }

        let order_count = view.len();
        let average_order_value = if order_count > 0 {
            total_sales / order_count as f64
        } else {
            0.0
        };

        Summary {
            total_sales,
            total_profit,
            order_count,
            average_order_value,
        }
    }
}

// ============================================================================
// GROUP-BY
// ============================================================================

/// A categorical key that orders can be grouped by.
pub trait GroupKey: Copy + Eq + std::hash::Hash {
    fn of(order: &Order) -> Self;
    fn label(&self) -> &'static str;
}

impl GroupKey for Region {
    fn of(order: &Order) -> Self {
        order.region
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl GroupKey for Category {
    fn of(order: &Order) -> Self {
        order.category
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

/// Summed sales of one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal<K> {
    pub key: K,
    pub sales: f64,
}

/// Sums sales per distinct key, ordered by key label.
pub fn sales_by<K: GroupKey>(view: &FilteredView<'_>) -> Vec<GroupTotal<K>> {
    let mut sums: FxHashMap<K, f64> = FxHashMap::default();
    for order in view.iter() {
        *sums.entry(K::of(order)).or_insert(0.0) += order.sales;
    }

    let mut totals: Vec<GroupTotal<K>> = sums
        .into_iter()
        .map(|(key, sales)| GroupTotal { key, sales })
        .collect();
    totals.sort_by(|a, b| a.key.label().cmp(b.key.label()));
    totals
}

pub fn sales_by_region(view: &FilteredView<'_>) -> Vec<GroupTotal<Region>> {
    sales_by::<Region>(view)
}

pub fn sales_by_category(view: &FilteredView<'_>) -> Vec<GroupTotal<Category>> {
    sales_by::<Category>(view)
}

/// The group with the largest sum.
///
/// Ties go to the first group in `totals` order, i.e. the alphabetically
/// first label for output of `sales_by`.
pub fn top_group<K: Copy>(totals: &[GroupTotal<K>]) -> Option<K> {
    let mut best: Option<&GroupTotal<K>> = None;
    for total in totals {
        match best {
            Some(b) if total.sales <= b.sales => {}
            _ => best = Some(total),
        }
    }
    best.map(|t| t.key)
}

// ============================================================================
// MONTHLY TREND
// ============================================================================

/// Summed sales of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// First day of the month.
    pub month: NaiveDate,
    pub sales: f64,
}

/// First day of the calendar month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Sums sales per calendar month, chronologically.
pub fn sales_by_month(view: &FilteredView<'_>) -> Vec<MonthlyTotal> {
    let mut sums: FxHashMap<NaiveDate, f64> = FxHashMap::default();
    for order in view.iter() {
        *sums.entry(month_start(order.date)).or_insert(0.0) += order.sales;
    }

    let mut months: Vec<MonthlyTotal> = sums
        .into_iter()
        .map(|(month, sales)| MonthlyTotal { month, sales })
        .collect();
    months.sort_by_key(|m| m.month);
    months
}

// ============================================================================
// QUANTITY
// ============================================================================

/// Mean quantity per order, or None for an empty view.
pub fn mean_quantity(view: &FilteredView<'_>) -> Option<f64> {
    if view.is_empty() {
        return None;
    }
    let total: u64 = view.iter().map(|o| o.quantity as u64).sum();
    Some(total as f64 / view.len() as f64)
}
