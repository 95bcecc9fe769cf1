use crate::util::normalize_lower;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One `{key, value}` pair as CloudFront transmits it; `key` keeps the canonical casing.
///
/// The platform may omit `key`; it then reads as empty and is left out again on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Header table in the edge platform layout: lowercase name mapped to a list of entries.
///
/// Insertion order is preserved so a request serializes back the way it arrived.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderMap {
    entries: IndexMap<String, Vec<HeaderEntry>>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// First value stored under `name`, which may be given in any casing.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(normalize_lower(name).as_str())
            .and_then(|values| values.first())
            .map(|entry| entry.value.as_str())
    }

    /// All entries stored under `name`.
    pub fn get_all(&self, name: &str) -> &[HeaderEntry] {
        self.entries
            .get(normalize_lower(name).as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `name` is present with at least one entry.
    pub fn contains(&self, name: &str) -> bool {
        !self.get_all(name).is_empty()
    }

    /// Replace whatever is stored under `key` with a single `{key, value}` entry.
    ///
    /// `key` is the canonical casing; the table is indexed by its lowercase form.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let name = normalize_lower(&key);
        self.entries.insert(name, vec![HeaderEntry::new(key, value)]);
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<HeaderEntry>> {
        self.entries.shift_remove(normalize_lower(name).as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[HeaderEntry])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }
}

impl<K, V> FromIterator<(K, V)> for HeaderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = HeaderMap::new();
        for (key, value) in iter {
            headers.insert(key, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
