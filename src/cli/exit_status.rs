use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, the report contains keys
/// - `Failure` (1): Command completed but found no keys (almost always a
///   scan pointed at the wrong tree)
/// - `Error` (2): Command failed due to internal error (config error,
///   missing source root, I/O failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but produced an empty report.
    Failure,
    /// Command failed due to internal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
