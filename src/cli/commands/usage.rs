use std::path::PathBuf;

use anyhow::{Context, Result};

use super::super::args::UsageCommand;
use super::{CommandResult, CommandSummary, UsageSummary, helper::resolve_output_dir};
use crate::config::Config;
use crate::usage::UsageAnalyzer;

pub fn usage(cmd: UsageCommand, config: &Config) -> Result<CommandResult> {
    let source_root = cmd
        .source_root
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    let locale_file = cmd
        .locale_file
        .unwrap_or_else(|| PathBuf::from(&config.locale_file));
    let extensions = if cmd.extensions.is_empty() {
        config.extensions.clone()
    } else {
        cmd.extensions
    };

    let report = UsageAnalyzer::new(&source_root, &locale_file)
        .with_extensions(extensions)
        .with_ignores(config.ignores.clone())
        .analyze()
        .with_context(|| {
            format!(
                "Could not analyze {} against {}",
                source_root.display(),
                locale_file.display()
            )
        })?;

    let output_dir = resolve_output_dir(&cmd.common, config);
    let written = report.write_missing_file(&output_dir)?;

    Ok(CommandResult::new(
        CommandSummary::Usage(UsageSummary { report, written }),
        cmd.common.strict,
    ))
}
