//! Terminal listing and summary output.
//!
//! Separate from the engine so propex can be used as a library without
//! printing side effects.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::engine::AggregatedReport;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const NONE_SET: &str = "NONE SET!";

/// Print a per-key listing: key, scope, defaults (green when present,
/// red when the operator has to supply every value).
pub fn print_listing(report: &AggregatedReport) {
    print_listing_to(report, &mut io::stdout().lock());
}

pub fn print_listing_to<W: Write>(report: &AggregatedReport, writer: &mut W) {
    let key_width = report
        .records()
        .iter()
        .map(|r| UnicodeWidthStr::width(r.key.as_str()))
        .max()
        .unwrap_or(0);

    for record in report.records() {
        let padding = key_width - UnicodeWidthStr::width(record.key.as_str());
        let defaults = if record.has_default_values() {
            record.default_values_joined().green()
        } else {
            NONE_SET.red()
        };

        let _ = writeln!(
            writer,
            "{}{:>pad$}  {}  {}",
            record.key.bold(),
            "",
            format!("[{}]", record.scope).dimmed(),
            defaults,
            pad = padding
        );

        if !record.origin_labels_joined().is_empty() {
            let _ = writeln!(
                writer,
                "  {} {}",
                "found in:".dimmed(),
                record.origin_labels_joined()
            );
        }
        for description in &record.descriptions {
            let _ = writeln!(writer, "  {} {}", "note:".dimmed(), description);
        }
    }
}

/// Print the end-of-run summary line.
pub fn print_summary(raw_count: usize, report: &AggregatedReport, files_scanned: usize) {
    print_summary_to(raw_count, report, files_scanned, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(
    raw_count: usize,
    report: &AggregatedReport,
    files_scanned: usize,
    writer: &mut W,
) {
    let message = format!(
        "Scanned {} {}: {} raw {}, {} distinct {}",
        files_scanned,
        pluralize(files_scanned, "file"),
        raw_count,
        pluralize(raw_count, "occurrence"),
        report.len(),
        pluralize(report.len(), "key"),
    );

    if report.is_empty() {
        let _ = writeln!(writer, "{} {}", FAILURE_MARK.red(), message.red());
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), message.green());
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
