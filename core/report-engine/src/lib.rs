//! FILENAME: core/report-engine/src/lib.rs
//! Sales report subsystem for InsightTrack.
//!
//! Depends on `engine` for the order model and base dataset.
//!
//! Layers:
//! - `definition`: Filter selection and options (what the report COVERS)
//! - `filter`: Order-preserving borrowed views (WHICH rows)
//! - `aggregate`: Totals and group-by sums (HOW we summarise)
//! - `view`: Renderable dashboard output (WHAT we display)
//! - `calculator`: The pipeline tying them together

pub mod definition;
pub mod filter;
pub mod aggregate;
pub mod view;
pub mod calculator;

pub use definition::*;
pub use filter::{apply_filter, matches, FilteredView};
pub use aggregate::{
    mean_quantity, month_start, sales_by, sales_by_category, sales_by_month, sales_by_region,
    top_group, GroupKey, GroupTotal, MonthlyTotal, Summary,
};
pub use view::*;
pub use calculator::{
    calculate_dashboard, ReportCalculator,
    METRIC_AVG_ORDER_VALUE, METRIC_TOTAL_ORDERS, METRIC_TOTAL_PROFIT, METRIC_TOTAL_SALES,
};
