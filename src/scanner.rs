use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::{Error, FileWarning, Result};

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths under the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning a source tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files in walk order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
    /// Entries that could not be accessed.
    pub warnings: Vec<FileWarning>,
}

/// Normalize an extension so `".tsx"` and `"tsx"` compare equal.
fn normalize_extension(ext: &str) -> &str {
    ext.trim_start_matches('.')
}

/// Recursively collect files under `root` whose extension is in `extensions`.
///
/// Paths matching `ignore_patterns` are skipped: glob patterns are matched
/// against both the full path and the path relative to `root`, literal
/// patterns are treated as path prefixes relative to `root`.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_patterns: &[String],
) -> Result<ScanResult> {
    if !root.exists() {
        return Err(Error::NotFound {
            path: root.to_path_buf(),
        });
    }

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();
    for p in ignore_patterns {
        if is_glob_pattern(p) {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let extensions: Vec<&str> = extensions
        .iter()
        .map(|e| normalize_extension(e))
        .collect();

    let mut result = ScanResult::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                result.warnings.push(FileWarning::new(path, &e));
                continue;
            }
        };
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        if literal_ignore_paths
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            continue;
        }

        let path_str = path.to_string_lossy();
        let relative = relative_display(root, path);
        if glob_patterns
            .iter()
            .any(|p| p.matches(&path_str) || p.matches(&relative))
        {
            continue;
        }

        let matches_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.contains(&ext));

        if matches_extension {
            result.files.push(path.to_path_buf());
        }
    }

    Ok(result)
}

/// Display path of `path` relative to `root`, falling back to the full path.
pub fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
