//! The extract command: scan, parse, aggregate, render.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{ExitStatus, ExtractCommand, OutputFormat};
use crate::config::Config;
use crate::engine::{self, AggregatedReport};
use crate::render;
use crate::scanner;

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let args = cmd.args;
    let verbose = args.common.verbose;
    let source_root = args
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let mut config = Config::load(&source_root)?;
    if !args.environments.is_empty() {
        config.environments = args.environments.clone();
    }
    // A relative --out-dir resolves against the source root, exactly like
    // the config file's outDir.
    let out_dir = match &args.out_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => source_root.join(dir),
        None => config.resolved_out_dir(&source_root),
    };

    // Scanner failures (missing root) abort here, before aggregation.
    let outcome = scanner::scan(&source_root, &config, verbose)?;
    let raw_count = outcome.occurrences.len();

    let report = engine::aggregate(
        outcome
            .occurrences
            .into_iter()
            .filter_map(engine::parse),
    );

    let artifacts = write_artifacts(&report, &config, &out_dir, &args.formats())?;

    if verbose {
        render::console::print_listing(&report);
    }
    render::console::print_summary(raw_count, &report, outcome.files_scanned);
    for artifact in &artifacts {
        println!("  {} {}", "wrote".dimmed(), artifact.display());
    }
    if verbose && outcome.skipped_count > 0 {
        eprintln!(
            "{} {} entries could not be read",
            "warning:".bold().yellow(),
            outcome.skipped_count
        );
    }

    if report.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn write_artifacts(
    report: &AggregatedReport,
    config: &Config,
    out_dir: &Path,
    formats: &[OutputFormat],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let mut artifacts = Vec::new();
    for format in formats {
        let path = match format {
            OutputFormat::Properties => render::template::write(report, out_dir)?,
            OutputFormat::Csv => render::sheet::write(report, &config.environments, out_dir)?,
            OutputFormat::Json => render::write_json(report, out_dir)?,
        };
        artifacts.push(path);
    }
    Ok(artifacts)
}
