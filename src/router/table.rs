//! # Route Table
//!
//! Ordered, validated mapping from URL paths to lazily loaded views.

use std::collections::HashSet;
use std::fmt;

use super::error::RouteError;
use super::loader::LazyView;

/// One navigable path
pub struct RouteEntry<V> {
    path: String,
    name: String,
    view: LazyView<V>,
}

impl<V> RouteEntry<V> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: LazyView<V>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unique name used for programmatic navigation
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn view(&self) -> &LazyView<V> {
        &self.view
    }
}

impl<V> Clone for RouteEntry<V> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            name: self.name.clone(),
            view: self.view.clone(),
        }
    }
}

impl<V> fmt::Debug for RouteEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("view", &self.view)
            .finish()
    }
}

/// Immutable route table; the first entry whose path matches wins
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
}

impl<V> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("entries", &self.entries)
            .finish()
    }
}

impl<V> RouteTable<V> {
    /// Build a table, rejecting malformed or duplicate paths and names
    ///
    /// Paths are stored normalized (see [`normalize_path`]).
    ///
    /// # Errors
    ///
    /// `InvalidPath`, `DuplicatePath` or `DuplicateName`.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self, RouteError> {
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());

        for mut entry in entries {
            if !entry.path.starts_with('/') {
                return Err(RouteError::InvalidPath(entry.path));
            }
            entry.path = normalize_path(&entry.path).to_string();
            if !paths.insert(entry.path.clone()) {
                return Err(RouteError::DuplicatePath(entry.path));
            }
            if !names.insert(entry.name.clone()) {
                return Err(RouteError::DuplicateName(entry.name));
            }
            normalized.push(entry);
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// Find the entry for a URL path; query string and fragment are ignored
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&RouteEntry<V>> {
        let path = normalize_path(path);
        self.entries.iter().find(|entry| entry.path == path)
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry<V>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip query string, fragment and trailing slashes; the root stays `/`
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str, name: &str) -> RouteEntry<&'static str> {
        RouteEntry::new(path, name, LazyView::ready("view"))
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("/contact?ref=footer"), "/contact");
        assert_eq!(normalize_path("/services#prices"), "/services");
        assert_eq!(normalize_path("/?utm=x"), "/");
    }

    #[test]
    fn test_duplicate_path_is_rejected() {
        let err = RouteTable::new(vec![entry("/about", "About"), entry("/about/", "AboutUs")])
            .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePath("/about".to_string()));
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let err = RouteTable::new(vec![entry("/about", "About"), entry("/team", "About")])
            .unwrap_err();
        assert_eq!(err, RouteError::DuplicateName("About".to_string()));
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let err = RouteTable::new(vec![entry("about", "About")]).unwrap_err();
        assert_eq!(err, RouteError::InvalidPath("about".to_string()));
    }

    #[test]
    fn test_resolve_is_exact_after_normalization() {
        let table = RouteTable::new(vec![entry("/", "Home"), entry("/about", "About")]).unwrap();
        assert_eq!(table.resolve("/about/").map(RouteEntry::name), Some("About"));
        assert_eq!(table.resolve("/?tab=1").map(RouteEntry::name), Some("Home"));
        assert!(table.resolve("/about/team").is_none());
        assert_eq!(table.by_name("Home").map(RouteEntry::path), Some("/"));
    }
}
