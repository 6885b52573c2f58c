//! Human-readable report rendering.

use bazaar_core::{fmt_compact_toman, fmt_toman, MarketReport};

/// Render a market report for the terminal.
pub fn render(report: &MarketReport) -> String {
    let mut lines = Vec::new();

    lines.push(format!("نتیجه تحلیل بازار: {}", report.query));
    lines.push(format!("جستجو: {}", report.url));
    if report.filtered_count == report.raw_count {
        lines.push(format!("تعداد آگهی: {}", report.raw_count));
    } else {
        lines.push(format!(
            "تعداد آگهی: {} (از {} پس از حذف قیمت‌های پرت)",
            report.filtered_count, report.raw_count
        ));
    }
    lines.push(String::new());
    lines.push(metric_line("کمترین قیمت", report.summary.min));
    lines.push(metric_line("بیشترین قیمت", report.summary.max));
    lines.push(metric_line("میانگین قیمت", report.summary.mean));
    lines.push(metric_line("میانه بازار", report.summary.median));

    lines.join("\n")
}

fn metric_line(title: &str, price: i64) -> String {
    let (val, unit) = fmt_compact_toman(price);
    format!("{title}: {val} {unit} ({})", fmt_toman(price))
}
