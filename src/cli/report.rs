//! Report formatting and printing.
//!
//! Reports go to stdout, skipped-file warnings to stderr. Every printer has a
//! `_to` variant taking a writer so output can be tested.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, CompareSummary, InitSummary, UsageSummary};
use crate::compare::{ComparisonReport, ComparisonResult, CoverageSummary};
use crate::document::leaf_text;
use crate::error::FileWarning;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Missing keys shown per locale before collapsing into a count.
const MISSING_KEYS_PREVIEW: usize = 10;

/// Extra keys are listed individually up to this count.
const EXTRA_KEYS_LIST_LIMIT: usize = 5;

/// Files listed per missing key in the usage report.
const FILES_PER_KEY_PREVIEW: usize = 2;

/// Unused keys shown before collapsing into a count.
const UNUSED_KEYS_PREVIEW: usize = 10;

/// Reference values longer than this are truncated in the report.
const VALUE_PREVIEW_CHARS: usize = 50;

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

pub fn print_to<W: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut W,
    err: &mut E,
) {
    print_warnings_to(result.warnings(), verbose, err);

    match &result.summary {
        CommandSummary::Compare(summary) => print_compare_to(summary, out),
        CommandSummary::Usage(summary) => print_usage_to(summary, verbose, out),
        CommandSummary::Init(summary) => print_init_to(summary, out),
    }
}

/// Print skipped-file warnings: one count line, or one line per file when verbose.
pub fn print_warnings_to<W: Write>(warnings: &[FileWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }
    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} skipped (use {} for details)",
            "warning:".bold().yellow(),
            plural(warnings.len(), "file", "files"),
            "-v".cyan()
        );
        return;
    }
    for warning in warnings {
        let _ = writeln!(
            writer,
            "{} skipped {}: {}",
            "warning:".bold().yellow(),
            warning.file_path,
            warning.error
        );
    }
}

/// Truncate `value` to [`VALUE_PREVIEW_CHARS`] characters, appending `...` when cut.
fn truncate_value(value: &str) -> String {
    if value.chars().count() > VALUE_PREVIEW_CHARS {
        let head: String = value.chars().take(VALUE_PREVIEW_CHARS).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", count, if count == 1 { singular } else { plural })
}

// ============================================================
// compare
// ============================================================

fn print_compare_to<W: Write>(summary: &CompareSummary, writer: &mut W) {
    let report = &summary.report;

    let _ = writeln!(
        writer,
        "{} {} ({})",
        "Reference:".bold(),
        report.reference_path.display(),
        plural(report.reference.len(), "key", "keys")
    );

    if report.results.is_empty() {
        let parent = report
            .reference_path
            .parent()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let _ = writeln!(
            writer,
            "{} No other locale files found in {}",
            FAILURE_MARK.yellow(),
            parent
        );
        return;
    }

    let _ = writeln!(
        writer,
        "Comparing {}",
        plural(report.results.len(), "locale file", "locale files")
    );

    for result in &report.results {
        print_comparison_result_to(report, result, writer);
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Missing translation files".bold());
    for result in &report.results {
        match summary.written.iter().find(|w| w.locale == result.locale) {
            Some(file) => {
                let _ = writeln!(
                    writer,
                    "  {} {}: {}",
                    SUCCESS_MARK.green(),
                    file.path.display(),
                    plural(file.key_count, "missing key", "missing keys")
                );
            }
            None if result.is_complete() => {
                let _ = writeln!(
                    writer,
                    "  {}",
                    format!("{}.json is complete - no missing file needed", result.locale)
                        .dimmed()
                );
            }
            None => {}
        }
    }

    if summary.show_summary
        && let Some(coverage) = report.summary()
    {
        print_coverage_summary_to(&coverage, &report.results, writer);
    }
}

fn print_comparison_result_to<W: Write>(
    report: &ComparisonReport,
    result: &ComparisonResult,
    writer: &mut W,
) {
    let file_name = result
        .file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} ({})",
        result.locale.to_uppercase().bold().cyan(),
        file_name
    );
    let _ = writeln!(
        writer,
        "  Coverage: {:.1}% ({}/{} keys)",
        result.coverage_percent(),
        report.reference.len() - result.missing.len(),
        report.reference.len()
    );
    let _ = writeln!(
        writer,
        "  Missing: {}  Extra: {}",
        result.missing.len(),
        result.extra.len()
    );

    if result.missing.is_empty() {
        let _ = writeln!(
            writer,
            "  {} {}",
            SUCCESS_MARK.green(),
            "No missing translations".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "  {} ({}):",
            "Missing translations".red(),
            result.missing.len()
        );
        for key in result.missing.iter().take(MISSING_KEYS_PREVIEW) {
            let value = report.reference.get(key).map(leaf_text).unwrap_or_default();
            let _ = writeln!(writer, "    - {}", key);
            let _ = writeln!(
                writer,
                "      {}: {}",
                report.reference_locale.to_uppercase().dimmed(),
                truncate_value(&value)
            );
        }
        if result.missing.len() > MISSING_KEYS_PREVIEW {
            let _ = writeln!(
                writer,
                "    ... and {} more missing keys",
                result.missing.len() - MISSING_KEYS_PREVIEW
            );
        }
    }

    if result.extra.is_empty() {
        return;
    }
    if result.extra.len() <= EXTRA_KEYS_LIST_LIMIT {
        let _ = writeln!(
            writer,
            "  {} ({}):",
            "Extra keys".yellow(),
            result.extra.len()
        );
        for key in &result.extra {
            let _ = writeln!(writer, "    - {}", key);
        }
    } else {
        let _ = writeln!(
            writer,
            "  {} extra keys (not in reference)",
            result.extra.len().to_string().yellow()
        );
    }
}

fn print_coverage_summary_to<W: Write>(
    summary: &CoverageSummary,
    results: &[ComparisonResult],
    writer: &mut W,
) {
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Summary".bold());
    let _ = writeln!(writer, "  Total languages: {}", summary.total);
    let _ = writeln!(writer, "  Complete languages: {}", summary.complete);
    let _ = writeln!(writer, "  Languages needing work: {}", summary.incomplete);
    let _ = writeln!(
        writer,
        "  Average coverage: {:.1}%",
        summary.mean_coverage * 100.0
    );
    let _ = writeln!(
        writer,
        "  Best coverage: {} ({:.1}%)",
        summary.best.0,
        summary.best.1 * 100.0
    );
    let _ = writeln!(
        writer,
        "  Worst coverage: {} ({:.1}%)",
        summary.worst.0,
        summary.worst.1 * 100.0
    );

    let name_width = results
        .iter()
        .map(|r| UnicodeWidthStr::width(r.locale.as_str()))
        .max()
        .unwrap_or(0);
    let _ = writeln!(writer);
    for result in results {
        let padding = name_width - UnicodeWidthStr::width(result.locale.as_str());
        let mark = if result.is_complete() {
            SUCCESS_MARK.green()
        } else {
            FAILURE_MARK.red()
        };
        let _ = writeln!(
            writer,
            "  {} {}{:padding$}  {:>5.1}%",
            mark,
            result.locale,
            "",
            result.coverage_percent(),
            padding = padding
        );
    }
}

// ============================================================
// usage
// ============================================================

fn print_usage_to<W: Write>(summary: &UsageSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;

    let _ = writeln!(
        writer,
        "Scanned {} in {}",
        plural(report.files_scanned, "source file", "source files"),
        report.source_root.display()
    );
    if verbose {
        for (file, keys) in &report.file_keys {
            let _ = writeln!(
                writer,
                "  {}: {}",
                file,
                plural(keys.len(), "key", "keys")
            );
        }
    }

    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Results".bold());
    let _ = writeln!(writer, "  Translation keys in code: {}", report.found.len());
    let _ = writeln!(
        writer,
        "  Translation keys in locale: {}",
        report.existing.len()
    );
    let _ = writeln!(writer, "  Missing translations: {}", report.missing.len());
    let _ = writeln!(writer, "  Unused translations: {}", report.unused.len());

    let _ = writeln!(writer);
    if report.missing.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "All translation keys found in locale file".green()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} ({}):",
            "Missing translations".red().bold(),
            report.missing.len()
        );
        for key in &report.missing {
            let files = report.files_using(key);
            let _ = writeln!(writer, "  - {}", key);
            for file in files.iter().take(FILES_PER_KEY_PREVIEW) {
                let _ = writeln!(writer, "    {} used in: {}", "└─".dimmed(), file);
            }
            if files.len() > FILES_PER_KEY_PREVIEW {
                let _ = writeln!(
                    writer,
                    "    {} ... and {} more files",
                    "└─".dimmed(),
                    files.len() - FILES_PER_KEY_PREVIEW
                );
            }
        }
    }

    if !report.unused.is_empty() {
        let _ = writeln!(writer);
        if report.unused.len() <= UNUSED_KEYS_PREVIEW {
            let _ = writeln!(
                writer,
                "{} ({}):",
                "Unused translations".yellow().bold(),
                report.unused.len()
            );
        } else {
            let _ = writeln!(
                writer,
                "{} ({}) - showing first {}:",
                "Unused translations".yellow().bold(),
                report.unused.len(),
                UNUSED_KEYS_PREVIEW
            );
        }
        for key in report.unused.iter().take(UNUSED_KEYS_PREVIEW) {
            let _ = writeln!(writer, "  - {}", key);
        }
        if report.unused.len() > UNUSED_KEYS_PREVIEW {
            let _ = writeln!(
                writer,
                "  ... and {} more",
                report.unused.len() - UNUSED_KEYS_PREVIEW
            );
        }
    }

    if let Some(path) = &summary.written {
        let _ = writeln!(writer);
        let _ = writeln!(
            writer,
            "{} Missing keys saved to: {}",
            SUCCESS_MARK.green(),
            path.display()
        );
    }
}

// ============================================================
// init
// ============================================================

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}
