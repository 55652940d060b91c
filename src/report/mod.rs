//! Report assembly and export serialization

mod assembler;
mod export;
mod pages;

pub use assembler::{
    flat_metrics, monthly_table, GrowthReport, MetricEntry, TableRow, REPORT_TITLE,
};
pub use export::{csv_string, write_csv, write_csv_file};
pub use pages::{render_pages, write_pages, DEFAULT_ROWS_PER_PAGE, PAGE_WIDTH};
