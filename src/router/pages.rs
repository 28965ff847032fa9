//! # Pages
//!
//! The site's navigable pages and their route table.

use tracing::debug;

use super::error::RouteError;
use super::loader::LazyView;
use super::table::{RouteEntry, RouteTable};
use crate::observability::metrics;

pub const HOME: &str = "Home";
pub const ABOUT: &str = "About";
pub const CONTACT_US: &str = "ContactUs";
pub const SERVICES: &str = "Services";

/// Descriptor of a page-level view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// View module identifier
    pub component: &'static str,
    pub title: &'static str,
}

/// Route table of the public site, in match order
///
/// # Errors
///
/// Only if the static table were malformed.
pub fn app_routes() -> Result<RouteTable<PageView>, RouteError> {
    RouteTable::new(vec![
        page("/", HOME, "home", "Home"),
        page("/about", ABOUT, "aboutUs", "About Us"),
        page("/contact", CONTACT_US, "contactUs", "Contact Us"),
        page("/services", SERVICES, "services", "Services"),
    ])
}

fn page(
    path: &'static str,
    name: &'static str,
    component: &'static str,
    title: &'static str,
) -> RouteEntry<PageView> {
    let view = LazyView::new(move || async move {
        debug!("Loading view module {} for route {}", component, name);
        metrics::increment_views_loaded(name);
        Ok(PageView { component, title })
    });
    RouteEntry::new(path, name, view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_routes_are_valid_and_ordered() {
        let table = app_routes().unwrap();
        let names: Vec<&str> = table.entries().iter().map(RouteEntry::name).collect();
        assert_eq!(names, [HOME, ABOUT, CONTACT_US, SERVICES]);
    }

    #[tokio::test]
    async fn test_views_are_not_loaded_until_activated() {
        let table = app_routes().unwrap();
        assert!(table.entries().iter().all(|entry| !entry.view().is_loaded()));

        let loads_before = metrics::views_loaded(SERVICES);
        let services = table.resolve("/services").unwrap();
        let view = services.view().load().await.unwrap();

        assert_eq!(view.component, "services");
        assert!(metrics::views_loaded(SERVICES) > loads_before);
        assert!(services.view().is_loaded());
        assert!(!table.resolve("/").unwrap().view().is_loaded());
    }
}
