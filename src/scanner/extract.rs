//! Harvesting raw marker occurrences from source text.
//!
//! Every double-quoted string literal containing `${` becomes one
//! [`RawOccurrence`]; deciding whether the text actually parses as a
//! marker is the engine's job, not ours. The origin label is the file
//! stem, the closest analog of a simple type name.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::context::{ContextDirective, DIRECTIVE_NAME};
use crate::engine::RawOccurrence;

static STRING_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).unwrap());

/// Read one file and harvest its raw occurrences.
pub fn scan_file(path: &Path) -> Result<Vec<RawOccurrence>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    Ok(harvest(&content, &origin_label(path)))
}

/// The reporting label for a file: its stem, falling back to the full
/// file name for files like `.env`.
pub fn origin_label(path: &Path) -> String {
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Harvest raw occurrences from source text.
///
/// A `propex-context` directive on a marker-bearing line applies to the
/// literals on that line (only those left of the directive, so the
/// directive's own quoted description is never harvested). A directive on
/// a line of its own applies to the next marker-bearing line, surviving
/// blank and ordinary code lines in between; it is consumed by that line
/// or replaced by a later directive, whichever comes first.
pub fn harvest(content: &str, origin_label: &str) -> Vec<RawOccurrence> {
    let mut occurrences = Vec::new();
    let mut pending: Option<ContextDirective> = None;

    for line in content.lines() {
        let directive = ContextDirective::parse(line);
        let scan_end = directive
            .as_ref()
            .and_then(|_| line.find(DIRECTIVE_NAME))
            .unwrap_or(line.len());

        let context = directive.clone().or_else(|| pending.clone());
        let mut found_literal = false;

        for captures in STRING_LITERAL_REGEX.captures_iter(&line[..scan_end]) {
            let literal = &captures[1];
            if !literal.contains("${") {
                continue;
            }
            found_literal = true;
            let mut raw = RawOccurrence::new(literal, origin_label);
            if let Some(directive) = &context {
                raw = raw.with_context(directive.scope, directive.description.clone());
            }
            occurrences.push(raw);
        }

        if found_literal {
            pending = None;
        } else if let Some(directive) = directive {
            pending = Some(directive);
        }
    }

    occurrences
}
