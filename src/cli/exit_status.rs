use std::process::ExitCode;

/// Exit status of a keydiff run.
///
/// - `Success` (0): run completed
/// - `Failure` (1): `--strict` run that found missing keys or skipped files
/// - `Error` (2): run aborted (missing reference, malformed reference, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a completed run. Findings only fail the run in strict mode.
    pub fn completed(strict: bool, has_findings: bool) -> Self {
        if strict && has_findings {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
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
