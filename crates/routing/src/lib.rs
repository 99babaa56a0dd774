//! Route table construction and resolution
//! Maps URL paths to named view components, built once at startup

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, trace};

/// Errors raised by route table construction and resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// Two entries share the same route name.
    #[error("duplicate route name `{name}`")]
    DuplicateRoute { name: String },
    /// Two entries resolve to the same path.
    #[error("conflicting route path `{path}`")]
    ConflictingPath { path: String },
    /// A navigation target matched no registered entry.
    #[error("no route matches `{path}`")]
    UnmatchedPath { path: String },
}

/// A view handle that can be rendered by the hosting application.
pub trait Renderable {
    type Output;

    fn render(&self) -> Self::Output;
}

/// A single (path, name, component) association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<C> {
    path: String,
    name: String,
    component: C,
}

impl<C> RouteEntry<C> {
    pub fn new(path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            component,
        }
    }

    /// Full path of this entry, resolved under the router's base path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unique name used for navigation by name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component(&self) -> &C {
        &self.component
    }
}

/// Outcome of resolving a navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a, C> {
    /// The path matched a registered entry.
    Matched(&'a RouteEntry<C>),
    /// No entry matched; the designated not-found view applies.
    Fallback(&'a C),
    /// No entry matched and no fallback view is installed.
    Unmatched,
}

/// Immutable route table built once at application bootstrap.
///
/// All entry paths are resolved under the base path and matched exactly
/// after normalization. The table never changes after [`Router::build`].
#[derive(Debug)]
pub struct Router<C> {
    base_path: String,
    routes: Vec<RouteEntry<C>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    fallback: Option<C>,
}

impl<C> Router<C> {
    /// Build a route table under `base_path`.
    ///
    /// Fails with [`RouterError::DuplicateRoute`] if two entries share a
    /// name, or [`RouterError::ConflictingPath`] if two entries normalize
    /// to the same path. A malformed table is a programming error, so
    /// callers should treat these as fatal at startup.
    pub fn build(
        base_path: impl Into<String>,
        entries: Vec<RouteEntry<C>>,
    ) -> Result<Self, RouterError> {
        let base_path = normalize(&base_path.into());

        let mut routes: Vec<RouteEntry<C>> = Vec::with_capacity(entries.len());
        let mut by_path = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len());

        for mut entry in entries {
            entry.path = join(&base_path, &entry.path);
            if by_name.contains_key(&entry.name) {
                return Err(RouterError::DuplicateRoute { name: entry.name });
            }
            if by_path.contains_key(&entry.path) {
                return Err(RouterError::ConflictingPath { path: entry.path });
            }
            by_name.insert(entry.name.clone(), routes.len());
            by_path.insert(entry.path.clone(), routes.len());
            routes.push(entry);
        }

        debug!(base = %base_path, routes = routes.len(), "route table built");

        Ok(Self {
            base_path,
            routes,
            by_path,
            by_name,
            fallback: None,
        })
    }

    /// Install the not-found view rendered when no entry matches.
    pub fn with_fallback(mut self, component: C) -> Self {
        self.fallback = Some(component);
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Registered entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<C>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Resolve a navigation target to its entry by exact match.
    pub fn resolve(&self, path: &str) -> Result<&RouteEntry<C>, RouterError> {
        let normalized = normalize(path);
        match self.by_path.get(&normalized).copied() {
            Some(index) => Ok(&self.routes[index]),
            None => {
                trace!(path = %normalized, "unmatched navigation target");
                Err(RouterError::UnmatchedPath { path: normalized })
            }
        }
    }

    /// Resolve a navigation target, recovering to the fallback view when
    /// no entry matches.
    pub fn resolve_or_fallback(&self, path: &str) -> Resolution<'_, C> {
        match self.resolve(path) {
            Ok(entry) => Resolution::Matched(entry),
            Err(_) => match &self.fallback {
                Some(view) => Resolution::Fallback(view),
                None => Resolution::Unmatched,
            },
        }
    }

    /// Full path registered under `name`, for navigation by name.
    pub fn path_of(&self, name: &str) -> Option<&str> {
        self.by_name
            .get(name)
            .map(|&index| self.routes[index].path())
    }
}

impl<C: Renderable> Router<C> {
    /// Resolve and render in one step. `None` only when the path is
    /// unmatched and no fallback view is installed.
    pub fn render(&self, path: &str) -> Option<C::Output> {
        match self.resolve_or_fallback(path) {
            Resolution::Matched(entry) => Some(entry.component().render()),
            Resolution::Fallback(view) => Some(view.render()),
            Resolution::Unmatched => None,
        }
    }
}

/// Normalize a path: leading slash, no duplicate or trailing slashes.
fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 1);
    out.push('/');
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(segment);
    }
    out
}

/// Join a normalized base path with an entry path.
fn join(base: &str, path: &str) -> String {
    let path = normalize(path);
    if base == "/" {
        path
    } else if path == "/" {
        base.to_string()
    } else {
        format!("{base}{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Vec<RouteEntry<&'static str>> {
        vec![
            RouteEntry::new("/", "Home", "home-view"),
            RouteEntry::new("/about", "About", "about-view"),
        ]
    }

    #[test]
    fn resolves_registered_paths() {
        let router = Router::build("/", table()).unwrap();
        assert_eq!(router.resolve("/").unwrap().name(), "Home");
        assert_eq!(router.resolve("/about").unwrap().component(), &"about-view");
    }

    #[test]
    fn trailing_slash_matches_same_entry() {
        let router = Router::build("/", table()).unwrap();
        assert_eq!(router.resolve("/about/").unwrap().name(), "About");
    }

    #[test]
    fn duplicate_name_rejected() {
        let entries = vec![
            RouteEntry::new("/", "Home", "a"),
            RouteEntry::new("/home", "Home", "b"),
        ];
        assert_eq!(
            Router::build("/", entries).unwrap_err(),
            RouterError::DuplicateRoute {
                name: "Home".into()
            }
        );
    }

    #[test]
    fn conflicting_path_rejected_after_normalization() {
        let entries = vec![
            RouteEntry::new("/about", "About", "a"),
            RouteEntry::new("about/", "AboutAgain", "b"),
        ];
        assert_eq!(
            Router::build("/", entries).unwrap_err(),
            RouterError::ConflictingPath {
                path: "/about".into()
            }
        );
    }

    #[test]
    fn unmatched_path_is_an_error() {
        let router = Router::build("/", table()).unwrap();
        assert_eq!(
            router.resolve("/missing").unwrap_err(),
            RouterError::UnmatchedPath {
                path: "/missing".into()
            }
        );
    }

    #[test]
    fn unmatched_path_falls_back() {
        let router = Router::build("/", table()).unwrap().with_fallback("404-view");
        match router.resolve_or_fallback("/missing") {
            Resolution::Fallback(view) => assert_eq!(view, &"404-view"),
            other => panic!("expected fallback, got {other:?}"),
        }
        match router.resolve_or_fallback("/about") {
            Resolution::Matched(entry) => assert_eq!(entry.name(), "About"),
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn unmatched_without_fallback() {
        let router = Router::build("/", table()).unwrap();
        assert_eq!(
            router.resolve_or_fallback("/missing"),
            Resolution::Unmatched
        );
    }

    #[test]
    fn base_path_prefixes_every_entry() {
        let router = Router::build("/site", table()).unwrap();
        assert_eq!(router.base_path(), "/site");
        assert_eq!(router.resolve("/site/about").unwrap().name(), "About");
        assert_eq!(router.resolve("/site").unwrap().name(), "Home");
        assert_eq!(router.path_of("About"), Some("/site/about"));
        assert!(router.resolve("/about").is_err());
    }

    #[test]
    fn path_of_unknown_name_is_none() {
        let router = Router::build("/", table()).unwrap();
        assert_eq!(router.path_of("Missing"), None);
    }

    #[test]
    fn rebuilding_yields_identical_mappings() {
        let first = Router::build("/", table()).unwrap();
        let second = Router::build("/", table()).unwrap();
        assert_eq!(first.len(), second.len());
        for entry in first.entries() {
            let twin = second.resolve(entry.path()).unwrap();
            assert_eq!(twin.name(), entry.name());
            assert_eq!(twin.component(), entry.component());
        }
    }

    struct Label(&'static str);

    impl Renderable for Label {
        type Output = String;

        fn render(&self) -> String {
            format!("<{}>", self.0)
        }
    }

    #[test]
    fn render_goes_through_the_component_handle() {
        let entries = vec![RouteEntry::new("/", "Home", Label("home"))];
        let router = Router::build("/", entries)
            .unwrap()
            .with_fallback(Label("not-found"));
        assert_eq!(router.render("/").as_deref(), Some("<home>"));
        assert_eq!(router.render("/nope").as_deref(), Some("<not-found>"));
    }

    #[test]
    fn empty_table_builds() {
        let router = Router::build("/", Vec::<RouteEntry<&str>>::new()).unwrap();
        assert!(router.is_empty());
        assert!(router.resolve("/").is_err());
    }
}
