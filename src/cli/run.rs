use std::env;

use anyhow::{Context, Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, compare::compare, init::init, usage::usage},
};
use crate::config::load_config;

/// Dispatch to the command handler for the parsed arguments.
///
/// The config file is looked up from the current directory; command-line
/// flags take precedence over its values.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Compare(cmd)) => {
            let config = current_config()?;
            compare(cmd, &config)
        }
        Some(Command::Usage(cmd)) => {
            let config = current_config()?;
            usage(cmd, &config)
        }
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

fn current_config() -> Result<crate::config::Config> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    Ok(load_config(&cwd)?.config)
}
