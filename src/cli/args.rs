//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan the project, aggregate placeholder keys, write the
//!   requested artifacts
//! - `init`: Initialize a propex configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Artifacts the extract command can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum OutputFormat {
    /// Flat key/value template file (template.properties)
    Properties,
    /// Tabular per-environment report (template.csv)
    Csv,
    /// Machine-readable report (report.json)
    Json,
}

#[derive(Debug, Parser)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output directory for artifacts (overrides config file)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Comma-separated target environment names (overrides config file)
    #[arg(long, value_delimiter = ',')]
    pub environments: Vec<String>,

    /// Artifacts to produce (default: properties and csv)
    /// Can be specified multiple times: --format properties --format json
    #[arg(long, value_enum)]
    pub format: Vec<OutputFormat>,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract configuration placeholders and render the report artifacts
    Extract(ExtractCommand),
    /// Create a default .propexrc.json in the current directory
    Init,
}

impl ExtractArgs {
    pub fn formats(&self) -> Vec<OutputFormat> {
        if self.format.is_empty() {
            return vec![OutputFormat::Properties, OutputFormat::Csv];
        }

        // First-occurrence order, duplicates removed wherever they appear.
        let mut formats: Vec<OutputFormat> = Vec::new();
        for format in &self.format {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }
        formats
    }
}
