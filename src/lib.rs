//! Growth System - deterministic projection engine for SaaS growth metrics
//!
//! This library provides:
//! - Funnel-driven active user projections over a fixed monthly horizon
//! - Revenue, churn, and unit-economics metrics (MRR, LTV, CAC)
//! - Ordered resolution of interdependent input assumptions
//! - Report assembly with delimited-text and paginated-text export
//! - Batch scenario runs from CSV assumption files

pub mod format;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{GrowthInputs, InputError, InputField};
pub use projection::{
    GrowthSummary, MonthlyRow, ProjectionConfig, ProjectionEngine, ProjectionResult,
};
pub use report::GrowthReport;
pub use scenario::ScenarioRunner;
