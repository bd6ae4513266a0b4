use anyhow::{Context, Result};

use super::super::args::CompareCommand;
use super::{CommandResult, CommandSummary, CompareSummary, helper::resolve_output_dir};
use crate::compare::LocaleComparator;
use crate::config::Config;

pub fn compare(cmd: CompareCommand, config: &Config) -> Result<CommandResult> {
    let locales_dir = cmd
        .locales_dir
        .unwrap_or_else(|| config.locales_dir.clone().into());
    let reference = cmd.reference.unwrap_or_else(|| config.reference.clone());

    let comparator = LocaleComparator::new(locales_dir, reference);
    let report = comparator.compare().with_context(|| {
        if comparator.locales_dir().is_dir() {
            format!(
                "Could not load reference file {}",
                comparator.reference_path().display()
            )
        } else {
            format!(
                "Could not read locales directory {}",
                comparator.locales_dir().display()
            )
        }
    })?;

    let output_dir = resolve_output_dir(&cmd.common, config);
    let written = report.write_missing_files(&output_dir)?;

    Ok(CommandResult::new(
        CommandSummary::Compare(CompareSummary {
            report,
            written,
            show_summary: cmd.summary,
        }),
        cmd.common.strict,
    ))
}
