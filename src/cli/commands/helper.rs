use std::path::PathBuf;

use super::super::args::CommonArgs;
use crate::config::Config;

/// Output directory from the command line, falling back to the config file.
pub fn resolve_output_dir(common: &CommonArgs, config: &Config) -> PathBuf {
    common
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_dir))
}
