//! Source scanner: discovers files and harvests raw marker occurrences.
//!
//! The scanner is the engine's upstream collaborator. It knows about
//! files, globs and comment directives; it knows nothing about what makes
//! a valid marker beyond "a string literal containing `${`".

mod context;
mod extract;
mod files;

use std::path::Path;

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;

pub use context::ContextDirective;
pub use extract::{harvest, origin_label, scan_file};
pub use files::{FileSet, discover_files};

use crate::config::Config;
use crate::engine::RawOccurrence;

/// Everything one scan pass produced.
pub struct ScanOutcome {
    pub occurrences: Vec<RawOccurrence>,
    pub files_scanned: usize,
    pub skipped_count: usize,
}

/// Scan the project tree for raw marker occurrences.
///
/// File discovery honors the configured includes/ignores; harvesting runs
/// per-file in parallel and the per-file results are concatenated in
/// sorted file order, so the occurrence stream is deterministic. A missing
/// source root is a hard error, surfaced before any aggregation runs.
pub fn scan(source_root: &Path, config: &Config, verbose: bool) -> Result<ScanOutcome> {
    if !source_root.is_dir() {
        bail!(
            "Source root does not exist or is not a directory: {}",
            source_root.display()
        );
    }

    let file_set = discover_files(
        source_root,
        &config.includes,
        &config.ignores,
        &config.extensions,
        config.ignore_test_files,
        verbose,
    );

    let mut skipped_count = file_set.skipped_count;
    let per_file: Vec<Result<Vec<RawOccurrence>>> =
        file_set.files.par_iter().map(|path| scan_file(path)).collect();

    let mut occurrences = Vec::new();
    for (path, result) in file_set.files.iter().zip(per_file) {
        match result {
            Ok(found) => occurrences.extend(found),
            Err(e) => {
                // Unreadable files (binary content, races with deletion)
                // are skipped like unwalkable directory entries.
                skipped_count += 1;
                if verbose {
                    eprintln!(
                        "{} Skipping {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        e
                    );
                }
            }
        }
    }

    Ok(ScanOutcome {
        occurrences,
        files_scanned: file_set.files.len(),
        skipped_count,
    })
}
