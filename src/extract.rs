//! Translation key extraction from source text.
//!
//! Only literal calls are recognized: `t("key")`, `t('key')` and `` t(`key`) ``.
//! Keys containing commas or quotes, and calls with extra arguments, are
//! ignored.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `t(<quoted key>)` where `t` is a standalone identifier.
static TRANSLATION_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bt\s*\(\s*['"`]([^'"`,]+)['"`]\s*\)"#).unwrap());

/// Source file extensions scanned by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// Extract every distinct translation key referenced in `source`.
pub fn extract_keys(source: &str) -> BTreeSet<String> {
    TRANSLATION_CALL_REGEX
        .captures_iter(source)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
