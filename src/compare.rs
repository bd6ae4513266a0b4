//! Locale comparison against a reference locale.
//!
//! Every `*.json` file next to the reference file is flattened and diffed
//! against it. A locale that fails to load is recorded as a warning and
//! skipped; only a missing or malformed reference aborts the comparison.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    document::{Document, FlatMap, load_flat, unflatten},
    error::{Error, FileWarning, Result},
    json_writer::write_document,
};

/// Key-set difference between one locale and the reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// Locale code, taken from the file stem (`fr` for `fr.json`).
    pub locale: String,
    pub file_path: PathBuf,
    /// Number of keys defined in this locale.
    pub total_keys: usize,
    /// Keys present in the reference but absent here.
    pub missing: BTreeSet<String>,
    /// Keys present here but absent from the reference.
    pub extra: BTreeSet<String>,
    /// Fraction of reference keys present here, in `0.0..=1.0`.
    pub coverage: f64,
}

impl ComparisonResult {
    pub fn compute(
        locale: impl Into<String>,
        file_path: impl Into<PathBuf>,
        reference: &FlatMap,
        entries: &FlatMap,
    ) -> Self {
        let missing: BTreeSet<String> = reference
            .keys()
            .filter(|key| !entries.contains_key(*key))
            .cloned()
            .collect();
        let extra: BTreeSet<String> = entries
            .keys()
            .filter(|key| !reference.contains_key(*key))
            .cloned()
            .collect();

        Self {
            locale: locale.into(),
            file_path: file_path.into(),
            total_keys: entries.len(),
            coverage: coverage(reference.len(), reference.len() - missing.len()),
            missing,
            extra,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn coverage_percent(&self) -> f64 {
        self.coverage * 100.0
    }
}

/// An empty reference counts as fully covered.
fn coverage(reference_count: usize, present: usize) -> f64 {
    if reference_count == 0 {
        1.0
    } else {
        present as f64 / reference_count as f64
    }
}

/// Aggregate statistics over all compared locales.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSummary {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub mean_coverage: f64,
    /// Locale with the highest coverage (first one wins ties).
    pub best: (String, f64),
    /// Locale with the lowest coverage (first one wins ties).
    pub worst: (String, f64),
}

/// A fill-in file written for an incomplete locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub locale: String,
    pub path: PathBuf,
    pub key_count: usize,
}

/// Outcome of comparing a locale directory against its reference.
#[derive(Debug)]
pub struct ComparisonReport {
    pub reference_locale: String,
    pub reference_path: PathBuf,
    /// Flattened reference entries.
    pub reference: FlatMap,
    /// One result per loaded locale, in file name order.
    pub results: Vec<ComparisonResult>,
    /// Locale files that could not be loaded.
    pub warnings: Vec<FileWarning>,
}

impl ComparisonReport {
    /// Nested `{missing_key: reference_value}` document for one result.
    pub fn missing_document(&self, result: &ComparisonResult) -> Document {
        unflatten(result.missing.iter().map(|key| {
            let value = self.reference.get(key).cloned().unwrap_or_default();
            (key, value)
        }))
    }

    pub fn summary(&self) -> Option<CoverageSummary> {
        let first = self.results.first()?;

        let mut best = first;
        let mut worst = first;
        for result in &self.results[1..] {
            if result.coverage > best.coverage {
                best = result;
            }
            if result.coverage < worst.coverage {
                worst = result;
            }
        }

        let total = self.results.len();
        let complete = self.results.iter().filter(|r| r.is_complete()).count();
        let mean_coverage = self.results.iter().map(|r| r.coverage).sum::<f64>() / total as f64;

        Some(CoverageSummary {
            total,
            complete,
            incomplete: total - complete,
            mean_coverage,
            best: (best.locale.clone(), best.coverage),
            worst: (worst.locale.clone(), worst.coverage),
        })
    }

    /// Write `missing_{locale}.json` into `output_dir` for every incomplete locale.
    pub fn write_missing_files(&self, output_dir: &Path) -> Result<Vec<WrittenFile>> {
        let mut written = Vec::new();
        for result in self.results.iter().filter(|r| !r.is_complete()) {
            let path = output_dir.join(missing_file_name(&result.locale));
            write_document(&path, &self.missing_document(result))?;
            written.push(WrittenFile {
                locale: result.locale.clone(),
                path,
                key_count: result.missing.len(),
            });
        }
        Ok(written)
    }
}

pub fn missing_file_name(locale: &str) -> String {
    format!("missing_{}.json", locale)
}

/// Compares every locale file in a directory against a reference locale.
#[derive(Debug, Clone)]
pub struct LocaleComparator {
    locales_dir: PathBuf,
    reference: String,
}

impl LocaleComparator {
    pub fn new(locales_dir: impl Into<PathBuf>, reference: impl Into<String>) -> Self {
        Self {
            locales_dir: locales_dir.into(),
            reference: reference.into(),
        }
    }

    pub fn locales_dir(&self) -> &Path {
        &self.locales_dir
    }

    pub fn reference_file_name(&self) -> String {
        format!("{}.json", self.reference)
    }

    pub fn reference_path(&self) -> PathBuf {
        self.locales_dir.join(self.reference_file_name())
    }

    /// All `*.json` files in the directory except the reference, sorted by name.
    pub fn find_locale_files(&self) -> Result<Vec<PathBuf>> {
        let entries =
            fs::read_dir(&self.locales_dir).map_err(|source| Error::io(&self.locales_dir, source))?;

        let reference_name = self.reference_file_name();
        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| Error::io(&self.locales_dir, source))?
                .path();

            let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
            let is_reference =
                path.file_name().and_then(|n| n.to_str()) == Some(reference_name.as_str());

            if path.is_file() && is_json && !is_reference {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    pub fn compare(&self) -> Result<ComparisonReport> {
        if !self.locales_dir.is_dir() {
            return Err(Error::NotFound {
                path: self.locales_dir.clone(),
            });
        }

        let reference_path = self.reference_path();
        let reference = load_flat(&reference_path)?;

        let mut results = Vec::new();
        let mut warnings = Vec::new();

        for path in self.find_locale_files()? {
            let Some(locale) = extract_locale(&path) else {
                continue;
            };
            match load_flat(&path) {
                Ok(entries) => {
                    results.push(ComparisonResult::compute(
                        locale, &path, &reference, &entries,
                    ));
                }
                Err(e) => warnings.push(FileWarning::new(&path, e)),
            }
        }

        Ok(ComparisonReport {
            reference_locale: self.reference.clone(),
            reference_path,
            reference,
            results,
            warnings,
        })
    }
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-CN")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
