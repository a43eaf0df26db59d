//! FILENAME: core/report-engine/src/view.rs
//! Dashboard View - The renderable output of one report calculation.
//!
//! Everything here is plain data: formatted metric cards, chart series,
//! table rows and insight lines. Renderers draw it without recomputing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use engine::{Category, Order, OrderId, Region};

/// Shown in place of insights when the filters match no orders.
pub const NO_MATCHES_MESSAGE: &str = "No orders match the selected filters.";

// ============================================================================
// METRICS
// ============================================================================

/// One headline metric display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    /// Raw value.
    pub value: f64,
    /// Formatted display text (e.g. "$12,345.67").
    pub display: String,
}

// ============================================================================
// CHARTS
// ============================================================================

/// A labelled value on a categorical axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Bar chart: one bar per region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<ChartPoint>,
}

/// A pie slice with its share of the whole (0.0..=1.0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

/// A point on the monthly trend line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub title: String,
    pub show_markers: bool,
    pub points: Vec<TrendPoint>,
}

/// One order plotted as Sales vs ProfitMargin. Hover shows id and region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub sales: f64,
    pub profit_margin: f64,
    pub order_id: OrderId,
    pub region: Region,
}

/// Points of one category (one colour).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub category: Category,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

// ============================================================================
// INSIGHTS
// ============================================================================

/// Short textual findings about the filtered orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Insights {
    Summary {
        top_region: Region,
        top_category: Category,
        mean_quantity: f64,
    },
    NoMatches,
}

impl Insights {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Insights::Summary {
                top_region,
                top_category,
                mean_quantity,
            } => vec![
                format!("Top Region: {}", top_region),
                format!("Top Category: {}", top_category),
                format!("Average Quantity per Order: {:.2}", mean_quantity),
            ],
            Insights::NoMatches => vec![NO_MATCHES_MESSAGE.to_string()],
        }
    }
}

// ============================================================================
// DASHBOARD
// ============================================================================

/// The complete dashboard for one filter selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Total Sales, Total Profit, Total Orders, Avg Order Value.
    pub metrics: Vec<MetricCard>,
    pub region_chart: BarChart,
    pub category_chart: PieChart,
    pub trend_chart: LineChart,
    pub margin_scatter: ScatterChart,
    /// Filtered orders, newest first.
    pub table: Vec<Order>,
    pub insights: Insights,
}

impl DashboardView {
    pub fn order_count(&self) -> usize {
        self.table.len()
    }

    pub fn metric(&self, label: &str) -> Option<&MetricCard> {
        self.metrics.iter().find(|m| m.label == label)
    }
}
