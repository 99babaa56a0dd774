//! Route definitions for the application
//!
//! The route table is the single source of truth for navigation: a
//! validated [`Router`] built at bootstrap maps every path to a view, and
//! the dioxus-router side is a single catch-all that delegates matching to
//! that table.

use dioxus::prelude::*;
use routing::{Renderable, RouteEntry, Router, RouterError};

use crate::components::{
    About, Contact, DatabaseInteraction, Home, Layout, NetworkTopology, NotFound, Page, Projects,
    Settings,
};

/// A page view backed by a plain component function
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageView(pub fn() -> Element);

impl Renderable for PageView {
    type Output = Element;

    fn render(&self) -> Element {
        (self.0)()
    }
}

/// The route table shared across the application
pub type SiteRouter = Router<PageView>;

/// Build the site route table under the given base path.
///
/// Fails when two entries share a name or a path; callers treat that as
/// fatal at startup.
pub fn site_router(base_path: &str) -> Result<SiteRouter, RouterError> {
    let entries = vec![
        RouteEntry::new("/", "Home", PageView(Home)),
        RouteEntry::new("/about", "About", PageView(About)),
        RouteEntry::new("/projects", "Projects", PageView(Projects)),
        RouteEntry::new("/contact", "Contact", PageView(Contact)),
        RouteEntry::new("/settings", "Settings", PageView(Settings)),
        RouteEntry::new(
            "/database-interaction",
            "DatabaseInteraction",
            PageView(DatabaseInteraction),
        ),
        RouteEntry::new(
            "/network-topology",
            "NetworkTopology",
            PageView(NetworkTopology),
        ),
    ];
    Ok(Router::build(base_path, entries)?.with_fallback(PageView(NotFound)))
}

/// Application routes
///
/// A single catch-all: the registered table, not this enum, decides which
/// view renders for a given path.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Layout)]
    #[route("/:..segments")]
    Page { segments: Vec<String> },
}

impl Route {
    /// Route targeting the given absolute path
    pub fn page(path: &str) -> Self {
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Route::Page { segments }
    }

    /// Absolute path of this route
    pub fn path(&self) -> String {
        let Route::Page { segments } = self;
        if segments.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", segments.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routing::Resolution;

    #[test]
    fn site_table_registers_every_page() {
        let router = site_router("/").unwrap();
        assert_eq!(router.len(), 7);
        for name in [
            "Home",
            "About",
            "Projects",
            "Contact",
            "Settings",
            "DatabaseInteraction",
            "NetworkTopology",
        ] {
            assert!(router.path_of(name).is_some(), "missing route {name}");
        }
    }

    #[test]
    fn paths_resolve_to_their_views() {
        let router = site_router("/").unwrap();
        assert_eq!(router.resolve("/").unwrap().name(), "Home");
        assert_eq!(router.resolve("/about").unwrap().name(), "About");
        assert_eq!(
            router.resolve("/database-interaction").unwrap().name(),
            "DatabaseInteraction"
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        let router = site_router("/").unwrap();
        assert!(matches!(
            router.resolve_or_fallback("/missing"),
            Resolution::Fallback(_)
        ));
    }

    #[test]
    fn base_path_is_applied_to_every_entry() {
        let router = site_router("/site").unwrap();
        assert_eq!(router.path_of("Contact"), Some("/site/contact"));
        assert_eq!(router.resolve("/site/projects").unwrap().name(), "Projects");
        assert!(router.resolve("/projects").is_err());
    }

    #[test]
    fn route_page_round_trips_paths() {
        assert_eq!(Route::page("/").path(), "/");
        assert_eq!(Route::page("/about").path(), "/about");
        assert_eq!(Route::page("/site/network-topology").path(), "/site/network-topology");
    }
}
