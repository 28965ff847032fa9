//! # Navigator
//!
//! Browser-like history over a [`RouteTable`]: push, back and forward.
//!
//! Leaving a history entry records the viewport position on it, so a later
//! back/forward to that entry hands the position to the scroll policy.

use std::sync::Arc;

use tracing::{debug, info};

use super::error::RouteError;
use super::scroll::{scroll_behavior, NavigationContext, ScrollPosition};
use super::table::{normalize_path, RouteTable};

#[derive(Debug, Clone, PartialEq)]
struct HistoryEntry {
    path: String,
    route: String,
    saved_position: Option<ScrollPosition>,
}

/// Outcome of a completed navigation
#[derive(Debug)]
pub struct Navigation<V> {
    /// Name of the activated route
    pub route: String,
    /// Location navigated to, query and fragment included
    pub path: String,
    pub view: Arc<V>,
    /// Where the viewport must scroll to
    pub scroll: ScrollPosition,
}

/// History stack bound to one route table
#[derive(Debug)]
pub struct Navigator<V> {
    table: Arc<RouteTable<V>>,
    history: Vec<HistoryEntry>,
    cursor: usize,
}

impl<V: Send + Sync + 'static> Navigator<V> {
    #[must_use]
    pub fn new(table: Arc<RouteTable<V>>) -> Self {
        Self {
            table,
            history: Vec::new(),
            cursor: 0,
        }
    }

    /// Location of the active history entry, query and fragment included
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.history.get(self.cursor).map(|entry| entry.path.as_str())
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty() && self.cursor > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Navigate to `path`, dropping any forward history
    ///
    /// `current_scroll` is remembered on the entry being left. Navigating to
    /// the active location (same path, query and fragment) leaves history and
    /// viewport untouched; a changed query is a new navigation.
    ///
    /// # Errors
    ///
    /// `NotFound` if no route matches, `ViewLoad` if the view fails to load.
    /// History is unchanged on error.
    pub async fn push(
        &mut self,
        path: &str,
        current_scroll: ScrollPosition,
    ) -> Result<Navigation<V>, RouteError> {
        let table = Arc::clone(&self.table);
        let entry = table
            .resolve(path)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))?;
        let view = entry.view().load().await?;
        let target = full_path(path);

        if self.current() == Some(target.as_str()) {
            debug!("Already at {}, keeping history", target);
            return Ok(Navigation {
                route: entry.name().to_string(),
                path: target,
                view,
                scroll: current_scroll,
            });
        }

        let from = self.current().map(str::to_string);
        let next = if self.history.is_empty() {
            0
        } else {
            self.remember(current_scroll);
            self.cursor + 1
        };
        self.history.truncate(next);
        self.history.push(HistoryEntry {
            path: target.clone(),
            route: entry.name().to_string(),
            saved_position: None,
        });
        self.cursor = next;

        let scroll = scroll_behavior(&NavigationContext {
            to: &target,
            from: from.as_deref(),
            saved_position: None,
        });
        info!("Navigated to {} ({})", target, entry.name());

        Ok(Navigation {
            route: entry.name().to_string(),
            path: target,
            view,
            scroll,
        })
    }

    /// Go one entry back; `Ok(None)` at the start of history
    ///
    /// # Errors
    ///
    /// `ViewLoad` if the view fails to load. History is unchanged on error.
    pub async fn back(
        &mut self,
        current_scroll: ScrollPosition,
    ) -> Result<Option<Navigation<V>>, RouteError> {
        if !self.can_go_back() {
            return Ok(None);
        }
        self.traverse(self.cursor - 1, current_scroll).await.map(Some)
    }

    /// Go one entry forward; `Ok(None)` at the end of history
    ///
    /// # Errors
    ///
    /// `ViewLoad` if the view fails to load. History is unchanged on error.
    pub async fn forward(
        &mut self,
        current_scroll: ScrollPosition,
    ) -> Result<Option<Navigation<V>>, RouteError> {
        if !self.can_go_forward() {
            return Ok(None);
        }
        self.traverse(self.cursor + 1, current_scroll).await.map(Some)
    }

    async fn traverse(
        &mut self,
        index: usize,
        current_scroll: ScrollPosition,
    ) -> Result<Navigation<V>, RouteError> {
        let target = self.history[index].clone();
        let table = Arc::clone(&self.table);
        let entry = table
            .by_name(&target.route)
            .ok_or_else(|| RouteError::NotFound(target.path.clone()))?;
        let view = entry.view().load().await?;

        let from = self.current().map(str::to_string);
        self.remember(current_scroll);
        self.cursor = index;

        let scroll = scroll_behavior(&NavigationContext {
            to: &target.path,
            from: from.as_deref(),
            saved_position: target.saved_position,
        });
        debug!(
            "Traversed history to {} (restored position: {})",
            target.path,
            target.saved_position.is_some()
        );

        Ok(Navigation {
            route: target.route,
            path: target.path,
            view,
            scroll,
        })
    }

    fn remember(&mut self, position: ScrollPosition) {
        if let Some(entry) = self.history.get_mut(self.cursor) {
            entry.saved_position = Some(position);
        }
    }
}

/// Normalized path with the original query string and fragment
fn full_path(path: &str) -> String {
    let suffix = path.find(['?', '#']).map_or("", |start| &path[start..]);
    format!("{}{suffix}", normalize_path(path))
}
