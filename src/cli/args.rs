//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `compare`: Compare locale files against the reference locale
//! - `usage`: Compare `t()` calls in source code against the reference locale
//! - `init`: Initialize keydiff configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Compare(cmd)) => cmd.common.verbose,
            Some(Command::Usage(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the analysis commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to write missing-key files into (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Exit with status 1 when keys are missing or files were skipped
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CompareCommand {
    /// Locales directory [default: src/locales]
    #[arg(long)]
    pub locales_dir: Option<PathBuf>,

    /// Reference language code [default: en]
    #[arg(long)]
    pub reference: Option<String>,

    /// Show summary report
    #[arg(long)]
    pub summary: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UsageCommand {
    /// Source folder [default: src]
    #[arg(long = "src")]
    pub source_root: Option<PathBuf>,

    /// Reference locale file [default: src/locales/en.json]
    #[arg(long = "locale")]
    pub locale_file: Option<PathBuf>,

    /// Source file extension to scan (repeatable, e.g. --ext .vue)
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare locale files with the reference locale and write missing_{lang}.json files
    Compare(CompareCommand),
    /// Find translation keys used in t() calls that are missing from the reference locale
    Usage(UsageCommand),
    /// Initialize a new .keydiffrc.json configuration file
    Init,
}
