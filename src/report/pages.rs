//! Paginated plain-text rendering of the growth report
//!
//! Fixed-width pages with a title and generation-date header, suitable for
//! printing or archiving. Rendering is pure; only the caller's I/O can
//! fail.

use std::error::Error;
use std::io::Write;

use super::assembler::GrowthReport;

/// Page width in characters
pub const PAGE_WIDTH: usize = 72;

/// Body lines per page, below the three header lines
pub const DEFAULT_ROWS_PER_PAGE: usize = 44;

fn center(text: &str) -> String {
    if text.len() >= PAGE_WIDTH {
        return text.to_string();
    }
    let pad = (PAGE_WIDTH - text.len()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

fn page_header(report: &GrowthReport) -> Vec<String> {
    vec![
        center(&report.title),
        center(&format!("Generated on: {}", report.generated_on)),
        "=".repeat(PAGE_WIDTH),
    ]
}

fn body_lines(report: &GrowthReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Key Metrics".to_string());
    lines.push("-".repeat(PAGE_WIDTH));
    for metric in &report.metrics {
        lines.push(format!("{:<32}{:>40}", metric.label, metric.value));
    }

    lines.push(String::new());
    lines.push("Monthly Projections".to_string());
    lines.push("-".repeat(PAGE_WIDTH));
    lines.push(format!(
        "{:<8}{:>20}{:>24}{:>20}",
        "Month", "Active Users", "Monthly Revenue", "Churned Users"
    ));
    for row in &report.monthly {
        lines.push(format!(
            "{:<8}{:>20}{:>24}{:>20}",
            row.label, row.active_users, row.monthly_revenue, row.churned_users
        ));
    }

    lines
}

/// Render the report as a sequence of fixed-width text pages.
///
/// Every page repeats the title and generation-date header; body lines are
/// split across pages at `rows_per_page`.
pub fn render_pages(report: &GrowthReport, rows_per_page: usize) -> Vec<String> {
    let rows_per_page = rows_per_page.max(1);
    let header = page_header(report);
    let body = body_lines(report);

    body.chunks(rows_per_page)
        .map(|chunk| {
            let mut page = header.clone();
            page.extend(chunk.iter().cloned());
            page.join("\n")
        })
        .collect()
}

/// Write the paginated report to any writer, pages separated by form feeds
pub fn write_pages<W: Write>(report: &GrowthReport, mut writer: W) -> Result<(), Box<dyn Error>> {
    let pages = render_pages(report, DEFAULT_ROWS_PER_PAGE);
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            writer.write_all(b"\x0c")?;
        }
        writer.write_all(page.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
