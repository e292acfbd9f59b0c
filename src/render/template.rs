//! Flat properties-template renderer.
//!
//! One block per key. Keys that already carry a default somewhere in the
//! codebase render commented out behind a `#<replace-me>` sentinel (they
//! only need a value when the operator wants to override); keys with no
//! default anywhere render as a live line that must be filled in.

use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::{AggregatedReport, KeyRecord};

const REPLACE_ME: &str = "#<replace-me>";
const NONE_SET: &str = "NONE SET!";

pub const TEMPLATE_FILE_NAME: &str = "template.properties";

pub fn render(report: &AggregatedReport) -> String {
    report.records().iter().map(render_record).collect()
}

fn render_record(record: &KeyRecord) -> String {
    let defaults = if record.has_default_values() {
        record.default_values_joined()
    } else {
        NONE_SET.to_string()
    };
    let sentinel = if record.has_default_values() {
        REPLACE_ME
    } else {
        ""
    };

    format!(
        "#context: '{}', default values are: '{}', found in: {}, description: '{}'\n{}{}=@{}@\n",
        record.scope,
        defaults,
        record.origin_labels_joined(),
        record.descriptions_joined(),
        sentinel,
        record.key,
        record.key,
    )
}

pub fn write(report: &AggregatedReport, out_dir: &Path) -> Result<std::path::PathBuf> {
    let path = out_dir.join(TEMPLATE_FILE_NAME);
    std::fs::write(&path, render(report))
        .with_context(|| format!("Failed to write properties template: {}", path.display()))?;
    Ok(path)
}
