//! # Router
//!
//! Route table, lazy view loading and the scroll policy.
//!
//! ## Sub-modules
//!
//! - `table` - Validated path → view mapping, first match wins
//! - `loader` - Single-flight memoizing view loader
//! - `scroll` - Scroll position policy applied after each navigation
//! - `navigator` - History stack driving the table and the scroll policy
//! - `pages` - The site's own pages

mod error;
mod loader;
mod navigator;
pub mod pages;
mod scroll;
mod table;

pub use error::{RouteError, ViewLoadError};
pub use loader::LazyView;
pub use navigator::{Navigation, Navigator};
pub use pages::{app_routes, PageView};
pub use scroll::{scroll_behavior, NavigationContext, ScrollPosition};
pub use table::{normalize_path, RouteEntry, RouteTable};
