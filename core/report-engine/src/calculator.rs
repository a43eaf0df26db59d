//! FILENAME: core/report-engine/src/calculator.rs
//! Report Calculator - Turns a dataset and a filter selection into a DashboardView.
//!
//! Algorithm:
//! 1. Filter the base dataset (order-preserving borrowed view)
//! 2. Aggregate: summary totals, region / category / month group sums
//! 3. Build the metric cards, chart series and newest-first table
//! 4. Derive the textual insights (or the no-matches message)
//!
//! The whole pipeline reruns from scratch on every filter change.

use engine::{format_number, Category, Dataset, NumberFormat, Region};

use crate::aggregate::{
    mean_quantity, sales_by_category, sales_by_month, sales_by_region, top_group, GroupKey,
    GroupTotal, Summary,
};
use crate::definition::FilterSelection;
use crate::filter::{apply_filter, FilteredView};
use crate::view::{
    BarChart, ChartPoint, DashboardView, Insights, LineChart, MetricCard, PieChart, PieSlice,
    ScatterChart, ScatterPoint, ScatterSeries, TrendPoint,
};

pub const METRIC_TOTAL_SALES: &str = "Total Sales";
pub const METRIC_TOTAL_PROFIT: &str = "Total Profit";
pub const METRIC_TOTAL_ORDERS: &str = "Total Orders";
pub const METRIC_AVG_ORDER_VALUE: &str = "Avg Order Value";

// ============================================================================
// REPORT CALCULATOR
// ============================================================================

/// Computes every dashboard section for one filtered view.
pub struct ReportCalculator<'a> {
    view: FilteredView<'a>,
    summary: Summary,
}

impl<'a> ReportCalculator<'a> {
    pub fn new(dataset: &'a Dataset, selection: &FilterSelection) -> Self {
        let view = apply_filter(dataset, selection);
        let summary = Summary::from_view(&view);
        ReportCalculator { view, summary }
    }

    pub fn view(&self) -> &FilteredView<'a> {
        &self.view
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Executes the full calculation.
    pub fn calculate(&self) -> DashboardView {
        let by_region = sales_by_region(&self.view);
        let by_category = sales_by_category(&self.view);

        DashboardView {
            metrics: self.build_metrics(),
            region_chart: build_bar_chart(&by_region),
            category_chart: build_pie_chart(&by_category),
            trend_chart: self.build_trend_chart(),
            margin_scatter: self.build_scatter(),
            table: self.view.sorted_by_date_desc().into_iter().cloned().collect(),
            insights: self.build_insights(&by_region, &by_category),
        }
    }

    fn build_metrics(&self) -> Vec<MetricCard> {
        let currency = NumberFormat::currency_usd();
        let s = &self.summary;
        vec![
            metric(METRIC_TOTAL_SALES, s.total_sales, &currency),
            metric(METRIC_TOTAL_PROFIT, s.total_profit, &currency),
            metric(METRIC_TOTAL_ORDERS, s.order_count as f64, &NumberFormat::Count),
            metric(METRIC_AVG_ORDER_VALUE, s.average_order_value, &currency),
        ]
    }

    fn build_trend_chart(&self) -> LineChart {
        LineChart {
            title: "Monthly Sales Trend".to_string(),
            show_markers: true,
            points: sales_by_month(&self.view)
                .into_iter()
                .map(|m| TrendPoint {
                    month: m.month,
                    value: m.sales,
                })
                .collect(),
        }
    }

    /// One series per category, in order of first appearance.
    fn build_scatter(&self) -> ScatterChart {
        let mut series: Vec<ScatterSeries> = Vec::new();
        for order in self.view.iter() {
            let point = ScatterPoint {
                sales: order.sales,
                profit_margin: order.profit_margin,
                order_id: order.order_id,
                region: order.region,
            };
            match series.iter_mut().find(|s| s.category == order.category) {
                Some(s) => s.points.push(point),
                None => series.push(ScatterSeries {
                    category: order.category,
                    points: vec![point],
                }),
            }
        }

        ScatterChart {
            title: "Sales vs Profit Margin".to_string(),
            series,
        }
    }

    fn build_insights(
        &self,
        by_region: &[GroupTotal<Region>],
        by_category: &[GroupTotal<Category>],
    ) -> Insights {
        match (
            top_group(by_region),
            top_group(by_category),
            mean_quantity(&self.view),
        ) {
            (Some(top_region), Some(top_category), Some(mean_quantity)) => Insights::Summary {
                top_region,
                top_category,
                mean_quantity,
            },
            _ => Insights::NoMatches,
        }
    }
}

fn metric(label: &str, value: f64, format: &NumberFormat) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value,
        display: format_number(value, format),
    }
}

fn build_bar_chart(totals: &[GroupTotal<Region>]) -> BarChart {
    BarChart {
        title: "Sales by Region".to_string(),
        x_label: "Region".to_string(),
        y_label: "Sales".to_string(),
        bars: totals
            .iter()
            .map(|t| ChartPoint {
                label: t.key.label().to_string(),
                value: t.sales,
            })
            .collect(),
    }
}

fn build_pie_chart(totals: &[GroupTotal<Category>]) -> PieChart {
    let whole: f64 = totals.iter().map(|t| t.sales).sum();
    PieChart {
        title: "Sales by Category".to_string(),
        slices: totals
            .iter()
            .map(|t| PieSlice {
                label: t.key.label().to_string(),
                value: t.sales,
                share: if whole > 0.0 { t.sales / whole } else { 0.0 },
            })
            .collect(),
    }
}

/// Runs the full report pipeline for `selection`.
pub fn calculate_dashboard(dataset: &Dataset, selection: &FilterSelection) -> DashboardView {
    ReportCalculator::new(dataset, selection).calculate()
}
