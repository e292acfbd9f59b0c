//! Tabular (CSV) renderer.
//!
//! One row per key with one column per target environment. Environment
//! cells are for the operator to fill in; a cell reads `filled` when the
//! codebase already carries a default for the key and `FILL ME` when it
//! does not, so missing values stand out when the sheet is filtered.

use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::{AggregatedReport, KeyRecord};

pub const SHEET_FILE_NAME: &str = "template.csv";

const HAS_DEFAULT_CELL: &str = "filled";
const NEEDS_VALUE_CELL: &str = "FILL ME";

pub fn render(report: &AggregatedReport, environments: &[String]) -> String {
    let mut out = String::new();
    write_row(
        &mut out,
        ["Key", "Scope", "Default values"]
            .into_iter()
            .map(String::from)
            .chain(environments.iter().cloned())
            .chain(["Found in", "Description"].into_iter().map(String::from)),
    );

    for record in report.records() {
        write_row(&mut out, row_cells(record, environments));
    }

    out
}

fn row_cells(record: &KeyRecord, environments: &[String]) -> impl Iterator<Item = String> {
    let env_cell = if record.has_default_values() {
        HAS_DEFAULT_CELL
    } else {
        NEEDS_VALUE_CELL
    };

    [
        record.key.clone(),
        record.scope.to_string(),
        record.default_values_joined(),
    ]
    .into_iter()
    .chain(environments.iter().map(move |_| env_cell.to_string()))
    .chain([record.origin_labels_joined(), record.descriptions_joined()])
}

fn write_row(out: &mut String, cells: impl Iterator<Item = String>) {
    let escaped: Vec<String> = cells.map(|c| escape(&c)).collect();
    out.push_str(&escaped.join(","));
    out.push('\n');
}

/// Quote a CSV field when it contains a comma, quote or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn write(
    report: &AggregatedReport,
    environments: &[String],
    out_dir: &Path,
) -> Result<std::path::PathBuf> {
    let path = out_dir.join(SHEET_FILE_NAME);
    std::fs::write(&path, render(report, environments))
        .with_context(|| format!("Failed to write tabular report: {}", path.display()))?;
    Ok(path)
}
