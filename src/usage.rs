//! Translation key usage analysis.
//!
//! Scans source files for `t("...")` calls and diffs the referenced keys
//! against a reference locale file: keys used in code but not defined are
//! missing, keys defined but never used are unused.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
};

use crate::{
    document::{Document, load_flat, unflatten},
    error::{FileWarning, Result},
    extract::{DEFAULT_EXTENSIONS, extract_keys},
    json_writer::write_document,
    scanner::{relative_display, scan_files},
};

/// Name of the aggregated fill-in file.
pub const MISSING_TRANSLATIONS_FILE: &str = "missing_translations.json";

/// Keys found in source files.
#[derive(Debug, Default)]
pub struct SourceKeys {
    /// Relative file path to the keys it references. Files without keys are omitted.
    pub file_keys: BTreeMap<String, BTreeSet<String>>,
    /// Union of all referenced keys.
    pub all_keys: BTreeSet<String>,
    pub files_scanned: usize,
    pub warnings: Vec<FileWarning>,
}

#[derive(Debug)]
pub struct UsageReport {
    pub source_root: PathBuf,
    pub locale_file: PathBuf,
    pub file_keys: BTreeMap<String, BTreeSet<String>>,
    /// Keys referenced in code.
    pub found: BTreeSet<String>,
    /// Keys defined in the reference locale.
    pub existing: BTreeSet<String>,
    /// Referenced in code, not defined.
    pub missing: BTreeSet<String>,
    /// Defined, never referenced.
    pub unused: BTreeSet<String>,
    pub files_scanned: usize,
    /// Source files that could not be read.
    pub warnings: Vec<FileWarning>,
}

impl UsageReport {
    /// Files referencing `key`, in path order.
    pub fn files_using(&self, key: &str) -> Vec<&str> {
        self.file_keys
            .iter()
            .filter(|(_, keys)| keys.contains(key))
            .map(|(file, _)| file.as_str())
            .collect()
    }

    /// Nested document with an empty placeholder for every missing key.
    pub fn missing_document(&self) -> Document {
        unflatten(self.missing.iter().map(|key| (key, "")))
    }

    /// Write [`MISSING_TRANSLATIONS_FILE`] into `output_dir`.
    ///
    /// Returns `None` without touching the filesystem when nothing is missing.
    pub fn write_missing_file(&self, output_dir: &Path) -> Result<Option<PathBuf>> {
        if self.missing.is_empty() {
            return Ok(None);
        }
        let path = output_dir.join(MISSING_TRANSLATIONS_FILE);
        write_document(&path, &self.missing_document())?;
        Ok(Some(path))
    }
}

#[derive(Debug, Clone)]
pub struct UsageAnalyzer {
    source_root: PathBuf,
    locale_file: PathBuf,
    extensions: Vec<String>,
    ignores: Vec<String>,
}

impl UsageAnalyzer {
    pub fn new(source_root: impl Into<PathBuf>, locale_file: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            locale_file: locale_file.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            ignores: Vec::new(),
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_ignores(mut self, ignores: Vec<String>) -> Self {
        self.ignores = ignores;
        self
    }

    /// Walk the source root and extract keys from every matching file.
    ///
    /// Unreadable files are recorded as warnings and skipped.
    pub fn scan_source_files(&self) -> Result<SourceKeys> {
        let scan = scan_files(&self.source_root, &self.extensions, &self.ignores)?;

        let mut result = SourceKeys {
            warnings: scan.warnings,
            ..Default::default()
        };

        for path in &scan.files {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    result.warnings.push(FileWarning::new(path, e));
                    continue;
                }
            };
            result.files_scanned += 1;

            let keys = extract_keys(&content);
            if keys.is_empty() {
                continue;
            }
            result.all_keys.extend(keys.iter().cloned());
            result
                .file_keys
                .insert(relative_display(&self.source_root, path), keys);
        }

        Ok(result)
    }

    pub fn analyze(&self) -> Result<UsageReport> {
        let source = self.scan_source_files()?;
        let existing: BTreeSet<String> = load_flat(&self.locale_file)?.into_keys().collect();

        let missing = source.all_keys.difference(&existing).cloned().collect();
        let unused = existing.difference(&source.all_keys).cloned().collect();

        Ok(UsageReport {
            source_root: self.source_root.clone(),
            locale_file: self.locale_file.clone(),
            file_keys: source.file_keys,
            found: source.all_keys,
            existing,
            missing,
            unused,
            files_scanned: source.files_scanned,
            warnings: source.warnings,
        })
    }
}
