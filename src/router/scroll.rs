//! # Scroll Policy
//!
//! Where the viewport ends up after a navigation completes.

use serde::{Deserialize, Serialize};

/// Viewport scroll offset in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    /// Top-left corner of the page
    pub const TOP: Self = Self { left: 0.0, top: 0.0 };

    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Everything the scroll policy may look at for one navigation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationContext<'a> {
    /// Path being navigated to
    pub to: &'a str,
    /// Path being left; `None` on the initial navigation
    pub from: Option<&'a str>,
    /// Position remembered for the target history entry (back/forward only)
    pub saved_position: Option<ScrollPosition>,
}

/// Restore the remembered position if there is one, otherwise go to the top
#[must_use]
pub fn scroll_behavior(context: &NavigationContext<'_>) -> ScrollPosition {
    context.saved_position.unwrap_or(ScrollPosition::TOP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_navigation_scrolls_to_top() {
        let context = NavigationContext {
            to: "/about",
            from: Some("/"),
            saved_position: None,
        };
        assert_eq!(scroll_behavior(&context), ScrollPosition::TOP);
    }

    #[test]
    fn test_saved_position_is_restored() {
        let saved = ScrollPosition::new(0.0, 840.0);
        let context = NavigationContext {
            to: "/",
            from: Some("/about"),
            saved_position: Some(saved),
        };
        assert_eq!(scroll_behavior(&context), saved);
    }

    #[test]
    fn test_initial_navigation_scrolls_to_top() {
        let context = NavigationContext {
            to: "/",
            from: None,
            saved_position: None,
        };
        assert_eq!(scroll_behavior(&context), ScrollPosition::TOP);
    }
}
