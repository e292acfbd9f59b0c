//! Renderers for the aggregated report.
//!
//! The engine hands over an immutable [`AggregatedReport`]; everything
//! here is presentation. A renderer failure is an I/O-level pipeline
//! error and never affects the already-computed report.

pub mod console;
pub mod sheet;
pub mod template;

use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::AggregatedReport;

pub const JSON_FILE_NAME: &str = "report.json";

/// Serialize the report as pretty-printed JSON for machine consumption.
pub fn render_json(report: &AggregatedReport) -> Result<String> {
    let json = serde_json::to_string_pretty(report)?;
    Ok(json + "\n")
}

pub fn write_json(report: &AggregatedReport, out_dir: &Path) -> Result<std::path::PathBuf> {
    let path = out_dir.join(JSON_FILE_NAME);
    std::fs::write(&path, render_json(report)?)
        .with_context(|| format!("Failed to write JSON report: {}", path.display()))?;
    Ok(path)
}
