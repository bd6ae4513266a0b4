use std::path::PathBuf;

use crate::compare::{ComparisonReport, WrittenFile};
use crate::error::FileWarning;
use crate::usage::UsageReport;

#[derive(Debug)]
pub enum CommandSummary {
    Compare(CompareSummary),
    Usage(UsageSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CompareSummary {
    pub report: ComparisonReport,
    pub written: Vec<WrittenFile>,
    /// Print the aggregate coverage summary after the per-locale details.
    pub show_summary: bool,
}

#[derive(Debug)]
pub struct UsageSummary {
    pub report: UsageReport,
    pub written: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a keydiff command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, findings turn a completed run into a failure exit status.
    pub strict: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, strict: bool) -> Self {
        Self { summary, strict }
    }

    /// Files skipped during the run.
    pub fn warnings(&self) -> &[FileWarning] {
        match &self.summary {
            CommandSummary::Compare(s) => &s.report.warnings,
            CommandSummary::Usage(s) => &s.report.warnings,
            CommandSummary::Init(_) => &[],
        }
    }

    /// True when keys are missing or any file was skipped.
    pub fn has_findings(&self) -> bool {
        let missing = match &self.summary {
            CommandSummary::Compare(s) => s.report.results.iter().any(|r| !r.is_complete()),
            CommandSummary::Usage(s) => !s.report.missing.is_empty(),
            CommandSummary::Init(_) => false,
        };
        missing || !self.warnings().is_empty()
    }
}
