//! FILENAME: app/src/render.rs
// PURPOSE: Plain-text rendering of a DashboardView.
// CONTEXT: Charts are drawn as labelled value lists with proportional bars.

use std::fmt::Write;

use engine::{format_number, NumberFormat};
use report_engine::DashboardView;

const BAR_WIDTH: usize = 40;
const RULE: &str = "------------------------------------------------------------";

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(len.max(1))
}

fn money(value: f64) -> String {
    format_number(value, &NumberFormat::currency_usd())
}

/// Renders the full dashboard.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "InsightTrack - Sales Dashboard");
    let _ = writeln!(out, "{}", RULE);

    for card in &view.metrics {
        let _ = writeln!(out, "{:<18}{}", card.label, card.display);
    }
    let _ = writeln!(out, "{}", RULE);

    render_charts(&mut out, view);
    render_table(&mut out, view);

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Quick Insights");
    for line in view.insights.lines() {
        let _ = writeln!(out, "- {}", line);
    }
    out
}

fn render_charts(out: &mut String, view: &DashboardView) {
    let region = &view.region_chart;
    let _ = writeln!(out, "{}", region.title);
    let max = region.bars.iter().map(|b| b.value).fold(0.0, f64::max);
    for b in &region.bars {
        let _ = writeln!(out, "  {:<12}{:>14}  {}", b.label, money(b.value), bar(b.value, max));
    }
    let _ = writeln!(out);

    let pie = &view.category_chart;
    let _ = writeln!(out, "{}", pie.title);
    for s in &pie.slices {
        let _ = writeln!(
            out,
            "  {:<12}{:>14}  {:>6}",
            s.label,
            money(s.value),
            format_number(s.share, &NumberFormat::Percentage { decimal_places: 1 })
        );
    }
    let _ = writeln!(out);

    let trend = &view.trend_chart;
    let _ = writeln!(out, "{}", trend.title);
    let max = trend.points.iter().map(|p| p.value).fold(0.0, f64::max);
    let marker = if trend.show_markers { "o" } else { "" };
    for p in &trend.points {
        let _ = writeln!(
            out,
            "  {:<12}{:>14}  {}{}",
            p.month.format("%Y-%m").to_string(),
            money(p.value),
            bar(p.value, max),
            marker
        );
    }
    let _ = writeln!(out);

    let scatter = &view.margin_scatter;
    let amount = NumberFormat::Number {
        decimal_places: 2,
        use_thousands_separator: true,
    };
    let margin = NumberFormat::number(2);
    let _ = writeln!(out, "{}", scatter.title);
    for series in &scatter.series {
        let _ = writeln!(out, "  [{}]", series.category);
        for p in &series.points {
            let _ = writeln!(
                out,
                "    #{} {:<6} sales={:>10} margin={:>6}%",
                p.order_id,
                p.region.as_str(),
                format_number(p.sales, &amount),
                format_number(p.profit_margin, &margin)
            );
        }
    }
    let _ = writeln!(out);
}

fn render_table(out: &mut String, view: &DashboardView) {
    let _ = writeln!(out, "Filtered Orders Table");
    let _ = writeln!(
        out,
        "  {:<8}{:<12}{:<8}{:<13}{:>4}{:>11}{:>11}{:>10}{:>8}",
        "OrderID", "Date", "Region", "Category", "Qty", "UnitPrice", "Sales", "Profit", "Margin"
    );
    for o in &view.table {
        let _ = writeln!(
            out,
            "  {:<8}{:<12}{:<8}{:<13}{:>4}{:>11.2}{:>11.2}{:>10.2}{:>8.2}",
            o.order_id,
            o.date.to_string(),
            o.region.as_str(),
            o.category.as_str(),
            o.quantity,
            o.unit_price,
            o.sales,
            o.profit,
            o.profit_margin
        );
    }
}
