//! Delimited-text serialization of the growth report

use csv::WriterBuilder;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::assembler::GrowthReport;

/// Serialize the report to delimited text: the flat metric list, a blank
/// separator row, the monthly section header, then one row per month.
///
/// Fields containing separators (grouped currency values) are quoted per
/// RFC 4180; the monthly rows carry raw rounded integers and are written
/// verbatim.
pub fn csv_string(report: &GrowthReport) -> Result<String, Box<dyn Error>> {
    let mut head = WriterBuilder::new().from_writer(Vec::new());
    head.write_record(["Metric", "Value"])?;
    for metric in &report.metrics {
        head.write_record([metric.label, metric.value.as_str()])?;
    }
    let head = String::from_utf8(head.into_inner().map_err(|e| e.into_error())?)?;

    // Monthly section holds a one-field title row, so the writer must accept
    // varying record lengths.
    let mut table = WriterBuilder::new().flexible(true).from_writer(Vec::new());
    table.write_record(["Monthly Projections"])?;
    table.write_record(["Month", "Active Users", "Monthly Revenue", "Churned Users"])?;
    for row in &report.monthly {
        table.write_record([
            row.label.clone(),
            row.active_users.to_string(),
            row.monthly_revenue.to_string(),
            row.churned_users.to_string(),
        ])?;
    }
    let table = String::from_utf8(table.into_inner().map_err(|e| e.into_error())?)?;

    Ok(format!("{}\n{}", head, table))
}

/// Write the report as delimited text to any writer
pub fn write_csv<W: Write>(report: &GrowthReport, mut writer: W) -> Result<(), Box<dyn Error>> {
    writer.write_all(csv_string(report)?.as_bytes())?;
    Ok(())
}

/// Write the report to a CSV file at the given path
pub fn write_csv_file<P: AsRef<Path>>(
    report: &GrowthReport,
    path: P,
) -> Result<(), Box<dyn Error>> {
    let file = File::create(path)?;
    write_csv(report, file)
}
