//! Front matter extraction.
//!
//! Only a small subset of YAML is understood: flat `key: value` pairs and
//! single-level lists written as a bare `key:` followed by `- item` lines.
//!
//! ```text
//! ---
//! title: Example
//! tags:
//!   - Alpha
//!   - Beta
//! ---
//! ```

use std::sync::OnceLock;

use regex::Regex;

const MARKER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldValue {
    Scalar(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Lists collapse to their items joined by `", "`.
    pub fn to_scalar(&self) -> String {
        match self {
            FieldValue::Scalar(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }

    /// A scalar becomes a one-element list.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            FieldValue::Scalar(s) => vec![s.clone()],
            FieldValue::List(items) => items.clone(),
        }
    }
}

/// Field name to value, kept in the order keys were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Metadata {
    entries: Vec<(String, FieldValue)>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn insert(&mut self, key: String, value: FieldValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn scalar(&self, key: &str) -> String {
        self.get(key).map(FieldValue::to_scalar).unwrap_or_default()
    }

    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key).map(FieldValue::to_list).unwrap_or_default()
    }
}

fn list_item_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*-\s+(.+)$").unwrap())
}

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\w[\w\s]*?):\s*(.*)$").unwrap())
}

/// Returns `None` when `content` has no front matter block, i.e. it does not
/// start with `---` or the closing `---` is missing.
///
/// Lines that are neither `key: value` nor `- item` are skipped. A `key:`
/// with no inline value and no list items after it produces no entry.
pub(crate) fn extract(content: &str) -> Option<Metadata> {
    let rest = content.strip_prefix(MARKER)?;
    let end = rest.find(MARKER)?;
    let header = rest[..end].trim();

    let mut metadata = Metadata::default();
    let mut current_key: Option<String> = None;
    let mut list_values: Vec<String> = vec![];

    for line in header.split('\n') {
        if let Some(caps) = list_item_pattern().captures(line) {
            if let Some(key) = &current_key {
                list_values.push(caps[1].trim().to_string());
                metadata.insert(key.clone(), FieldValue::List(list_values.clone()));
            }
            continue;
        }

        if let Some(caps) = key_pattern().captures(line) {
            let key = caps[1].trim().to_string();
            let value = caps[2].trim();
            // a bare `key:` means a list follows
            list_values = vec![];
            if !value.is_empty() {
                metadata.insert(key.clone(), FieldValue::Scalar(value.to_string()));
            }
            current_key = Some(key);
        }
    }

    Some(metadata)
}
