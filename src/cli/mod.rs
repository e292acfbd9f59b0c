//! Command-line interface layer: argument parsing and command dispatch.

use anyhow::Result;

mod args;
mod exit_status;

pub use args::{Arguments, Command, CommonArgs, ExtractArgs, ExtractCommand, OutputFormat};
pub use exit_status::ExitStatus;

use crate::commands::{extract, init};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Extract(cmd)) => extract::extract(cmd),
        Some(Command::Init) => init::init(),
        None => anyhow::bail!("No command provided. Use --help to see available commands."),
    }
}
