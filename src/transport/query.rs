//! # Query Parameters
//!
//! Filter mapping passed verbatim to list operations.

use std::collections::BTreeMap;
use std::fmt::Display;

/// String-keyed filter mapping encoded as URL query parameters
///
/// Keys and values are passed through key-for-key without renaming or
/// interpretation. Iteration order is sorted by key, which keeps the
/// encoded query string deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.0.insert(key.into(), value.to_string());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_stringified_verbatim() {
        let params = QueryParams::new()
            .with("salon", 3)
            .with("date", "2026-10-19")
            .with("is_blocked", false);
        assert_eq!(params.get("salon"), Some("3"));
        assert_eq!(params.get("date"), Some("2026-10-19"));
        assert_eq!(params.get("is_blocked"), Some("false"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_iteration_is_sorted_by_key() {
        let params: QueryParams = [("status", "active"), ("city", "Tehran")].into_iter().collect();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["city", "status"]);
    }
}
