//! FILENAME: core/engine/src/derived.rs
//! PURPOSE: Derived-field calculator (Sales, Profit, ProfitMargin).

use crate::generator::RandomSource;
use crate::order::{Order, RawOrder};

/// Range of the per-order profit jitter factor.
pub const JITTER_MIN: f64 = 0.9;
pub const JITTER_MAX: f64 = 1.1;

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Order {
    /// Builds a complete order from its raw fields and a profit jitter factor.
    pub fn derive(raw: RawOrder, jitter: f64) -> Order {
        let sales = round2(raw.quantity as f64 * raw.unit_price);
        let profit = round2(sales * raw.category.margin_rate() * jitter);
        // Sales is strictly positive for every generated row
        let profit_margin = if sales != 0.0 {
            round2(profit / sales * 100.0)
        } else {
            0.0
        };

        Order {
            order_id: raw.order_id,
            date: raw.date,
            region: raw.region,
            category: raw.category,
            quantity: raw.quantity,
            unit_price: raw.unit_price,
            sales,
            profit,
            profit_margin,
        }
    }
}

/// Appends derived fields to every raw order, drawing one jitter per row.
///
/// Jitters are drawn in row order after the raw columns, so the same source
/// state always produces the same profits.
pub fn derive_orders<R>(raws: Vec<RawOrder>, rng: &mut R) -> Vec<Order>
where
    R: RandomSource + ?Sized,
{
    let jitters: Vec<f64> = (0..raws.len())
        .map(|_| rng.uniform(JITTER_MIN, JITTER_MAX))
        .collect();

    raws.into_iter()
        .zip(jitters)
        .map(|(raw, jitter)| Order::derive(raw, jitter))
        .collect()
}
