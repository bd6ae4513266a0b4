//! keydiff - translation key auditing for JSON locale files
//!
//! keydiff compares a reference locale against the other locales in a
//! directory and against the `t("...")` calls found in source code. It reports
//! missing, extra, and unused keys and writes fill-in JSON files for the
//! missing ones.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting)
//! - `compare`: Locale-to-reference comparison
//! - `config`: Configuration file loading and parsing
//! - `document`: Translation documents, flatten and unflatten
//! - `error`: Error and warning types
//! - `extract`: `t()` call key extraction
//! - `json_writer`: Pretty JSON output
//! - `scanner`: Source tree walking
//! - `usage`: Source usage analysis

pub mod cli;
pub mod compare;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod json_writer;
pub mod scanner;
pub mod usage;

pub use error::{Error, FileWarning, Result};
