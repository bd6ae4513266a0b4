//! Translation documents and the flat key-path view over them.
//!
//! A locale file is a tree of objects whose leaves are usually strings.
//! [`flatten`] turns it into a [`FlatMap`] keyed by dot-joined paths
//! (`"HomePage.cta.startNow"`) and [`unflatten`] builds the tree back from
//! such pairs. Any value that is not an object is a single leaf and keeps its
//! JSON type.

use std::{borrow::Cow, collections::BTreeMap, fs, path::Path};

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Separator between the segments of a flat key.
pub const KEY_SEPARATOR: char = '.';

/// Flat key to leaf value.
pub type FlatMap = BTreeMap<String, Value>;

/// A node of a translation document: either a leaf or a nested mapping.
///
/// Leaves hold any non-object JSON value (strings, numbers, booleans, `null`,
/// arrays) and are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Leaf(Value),
    Map(Document),
}

/// Nested mapping from key to [`Node`].
///
/// Keys are ordered so that serializing a document is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    entries: BTreeMap<String, Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Node)> {
        self.entries.iter()
    }

    /// Convert a parsed JSON value into a document.
    ///
    /// Returns `None` when the root is not an object.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(
                map.into_iter()
                    .map(|(key, val)| (key, node_from_json(val)))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Serialize with 2-space indentation. Non-ASCII characters are kept as-is.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<(String, Node)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Node)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn node_from_json(value: Value) -> Node {
    match value {
        Value::Object(map) => Node::Map(
            map.into_iter()
                .map(|(key, val)| (key, node_from_json(val)))
                .collect(),
        ),
        leaf => Node::Leaf(leaf),
    }
}

/// Text shown for a leaf in reports: strings as-is, anything else as JSON.
pub fn leaf_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        other => Cow::Owned(other.to_string()),
    }
}

/// Read and parse a JSON translation document.
pub fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;

    let value: Value = serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Document::from_json(value).ok_or_else(|| Error::NotAnObject {
        path: path.to_path_buf(),
    })
}

/// Read a document and flatten it in one step.
pub fn load_flat(path: &Path) -> Result<FlatMap> {
    load_document(path).map(|doc| flatten(&doc))
}

/// Flatten a document into dot-joined keys.
///
/// Empty nested mappings contribute no keys, so `{"a": {}}` flattens to an
/// empty map.
pub fn flatten(doc: &Document) -> FlatMap {
    let mut flat = FlatMap::new();
    flatten_into(doc, "", &mut flat);
    flat
}

fn flatten_into(doc: &Document, prefix: &str, out: &mut FlatMap) {
    for (key, node) in doc.iter() {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", prefix, KEY_SEPARATOR, key)
        };
        match node {
            Node::Leaf(value) => {
                out.insert(path, value.clone());
            }
            Node::Map(inner) => flatten_into(inner, &path, out),
        }
    }
}

/// Build a nested document from flat key/value pairs.
///
/// Entries are applied in iteration order. When a segment already holds a
/// leaf it is replaced by a mapping, and a later leaf replaces whatever was
/// at its path.
pub fn unflatten<I, K, V>(entries: I) -> Document
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Value>,
{
    let mut doc = Document::new();
    for (key, value) in entries {
        let parts: Vec<&str> = key.as_ref().split(KEY_SEPARATOR).collect();
        insert_nested(&mut doc.entries, &parts, value.into());
    }
    doc
}

fn insert_nested(root: &mut BTreeMap<String, Node>, path: &[&str], value: Value) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        root.insert(first.to_string(), Node::Leaf(value));
        return;
    }

    let next = root
        .entry(first.to_string())
        .or_insert_with(|| Node::Map(Document::new()));

    if matches!(next, Node::Leaf(_)) {
        *next = Node::Map(Document::new());
    }

    if let Node::Map(inner) = next {
        insert_nested(&mut inner.entries, rest, value);
    }
}
