//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Hold the declared route table in declaration order
//! - Resolve an incoming path to a page, following redirects
//! - Apply the explicit fallback for unmatched paths
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins, in declaration order (never re-sorted)
//! - Explicit fallback rather than silent undefined behavior
//! - No global instance; callers own the router and pass it by reference

use thiserror::Error;
use url::Url;

use crate::routing::entry::{Domain, Page, RouteAction, RouteEntry, RouteMeta};
use crate::routing::pattern::PathParams;
use crate::routing::validation::{validate_table, TableError};

/// Redirect chains longer than this are rejected.
pub(crate) const MAX_REDIRECT_HOPS: usize = 8;

/// Destination for paths that match no declared entry.
///
/// There is deliberately no default: the table author must decide what an
/// unregistered path does.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    /// Forward unmatched paths to a declared path.
    RedirectTo(String),
    /// Render a page directly (e.g. a not-found page).
    RenderPage(Page),
}

/// Error type for route resolution.
///
/// A validated table cannot produce these; they guard the resolution
/// invariants themselves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouterError {
    #[error("resolving `{path}` exceeded {MAX_REDIRECT_HOPS} redirect hops")]
    RedirectLoop { path: String },

    #[error("fallback target `{to}` matches no entry")]
    UnmatchedFallback { to: String },
}

/// Outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Resolution {
    /// Page to render.
    pub page: Page,

    /// Captured path parameters; empty unless the entry exposes them.
    pub params: PathParams,

    /// Display metadata of the rendered entry.
    pub meta: RouteMeta,

    /// Paths traversed before reaching the rendered entry, oldest first.
    pub redirected_from: Vec<String>,

    /// True when the fallback decided the outcome.
    pub fell_back: bool,
}

/// Immutable route table with first-match-wins resolution.
#[derive(Debug, Clone)]
pub struct Router {
    entries: Vec<RouteEntry>,
    fallback: Fallback,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Resolve a path to a page, following redirects and the fallback.
    pub fn resolve(&self, path: &str) -> Result<Resolution, RouterError> {
        let mut current = path.to_string();
        let mut redirected_from = Vec::new();
        let mut fell_back = false;

        for _ in 0..=MAX_REDIRECT_HOPS {
            match self.match_path(&current) {
                Some((entry, params)) => match entry.action() {
                    RouteAction::Render {
                        page,
                        expose_params,
                    } => {
                        tracing::debug!(path = %current, page = %page, "route matched");
                        return Ok(Resolution {
                            page: *page,
                            params: if *expose_params {
                                params
                            } else {
                                PathParams::default()
                            },
                            meta: entry.meta().clone(),
                            redirected_from,
                            fell_back,
                        });
                    }
                    RouteAction::Redirect { to } => {
                        tracing::debug!(from = %current, to = %to, "following redirect");
                        redirected_from.push(current);
                        current = to.clone();
                    }
                },
                None if fell_back => {
                    return Err(RouterError::UnmatchedFallback { to: current });
                }
                None => {
                    tracing::warn!(path = %current, "no route matched, applying fallback");
                    fell_back = true;
                    match &self.fallback {
                        Fallback::RedirectTo(to) => {
                            redirected_from.push(current);
                            current = to.clone();
                        }
                        Fallback::RenderPage(page) => {
                            return Ok(Resolution {
                                page: *page,
                                params: PathParams::default(),
                                meta: RouteMeta::default(),
                                redirected_from,
                                fell_back,
                            });
                        }
                    }
                }
            }
        }

        Err(RouterError::RedirectLoop {
            path: path.to_string(),
        })
    }

    /// Resolve the path component of a full URL. Query and fragment are the
    /// pages' concern, not the router's.
    pub fn resolve_url(&self, url: &Url) -> Result<Resolution, RouterError> {
        self.resolve(url.path())
    }

    /// Single-step match: first entry whose pattern matches, with captures.
    /// Does not follow redirects or apply the fallback.
    pub fn match_path(&self, path: &str) -> Option<(&RouteEntry, PathParams)> {
        self.entries
            .iter()
            .find_map(|entry| entry.pattern().matches(path).map(|params| (entry, params)))
    }

    /// Declared entries, in declaration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> &Fallback {
        &self.fallback
    }
}

/// Collects route entries in declaration order and builds a validated
/// [`Router`].
///
/// Metadata modifiers (`titled`, `auth`, `domain`, `expose_params`) apply to
/// the most recently declared entry, so the code reads top to bottom like
/// the table it declares.
#[derive(Debug, Default)]
pub struct RouterBuilder {
    entries: Vec<RouteEntry>,
    errors: Vec<TableError>,
    fallback: Option<Fallback>,
}

impl RouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a render entry.
    pub fn page(mut self, pattern: &str, page: Page) -> Self {
        match RouteEntry::page(pattern, page) {
            Ok(entry) => self.entries.push(entry),
            Err(e) => self.errors.push(e.into()),
        }
        self
    }

    /// Declare a redirect entry.
    pub fn redirect(mut self, pattern: &str, to: &str) -> Self {
        match RouteEntry::redirect(pattern, to) {
            Ok(entry) => self.entries.push(entry),
            Err(e) => self.errors.push(e.into()),
        }
        self
    }

    /// Set the title of the last declared entry.
    pub fn titled(mut self, title: &str) -> Self {
        self.map_last(|entry| entry.titled(title));
        self
    }

    /// Mark the last declared entry as an auth page (no chrome, auth shell).
    pub fn auth(mut self) -> Self {
        self.map_last(RouteEntry::auth_layout);
        self
    }

    /// Tag the last declared entry with a domain.
    pub fn domain(mut self, domain: Domain) -> Self {
        self.map_last(|entry| entry.in_domain(domain));
        self
    }

    /// Expose captured params to the last declared entry's page.
    pub fn expose_params(mut self) -> Self {
        self.map_last(RouteEntry::with_params);
        self
    }

    /// Set the destination for unmatched paths. Required.
    pub fn fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Validate the declared table and freeze it.
    pub fn build(self) -> Result<Router, Vec<TableError>> {
        let mut errors = self.errors;
        if let Err(table_errors) = validate_table(&self.entries, self.fallback.as_ref()) {
            errors.extend(table_errors);
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        let fallback = match self.fallback {
            Some(fallback) => fallback,
            // Unreachable once validation passed; kept explicit.
            None => return Err(vec![TableError::MissingFallback]),
        };

        tracing::info!(routes = self.entries.len(), "route table built");
        Ok(Router {
            entries: self.entries,
            fallback,
        })
    }

    fn map_last(&mut self, f: impl FnOnce(RouteEntry) -> RouteEntry) {
        if let Some(entry) = self.entries.pop() {
            self.entries.push(f(entry));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Router {
        Router::builder()
            .redirect("/", "/home")
            .page("/home", Page::Dashboard)
            .titled("Home")
            .page("/users", Page::Users)
            .page("/users/me", Page::UserProfile)
            .page("/users/:id", Page::UserDetail)
            .expose_params()
            .fallback(Fallback::RedirectTo("/home".into()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_first_match_wins_in_declaration_order() {
        let router = table();

        let resolution = router.resolve("/users/me").unwrap();
        assert_eq!(resolution.page, Page::UserProfile);
        assert!(resolution.params.is_empty());

        let resolution = router.resolve("/users/42").unwrap();
        assert_eq!(resolution.page, Page::UserDetail);
        assert_eq!(resolution.params.get("id"), Some("42"));
    }

    #[test]
    fn test_param_route_declared_first_shadows_literal() {
        let router = Router::builder()
            .page("/users/:id", Page::UserDetail)
            .expose_params()
            .page("/users/me", Page::UserProfile)
            .fallback(Fallback::RenderPage(Page::Dashboard))
            .build()
            .unwrap();

        // Declaration order is the only precedence rule.
        let resolution = router.resolve("/users/me").unwrap();
        assert_eq!(resolution.page, Page::UserDetail);
        assert_eq!(resolution.params.get("id"), Some("me"));
    }

    #[test]
    fn test_root_redirect_records_chain() {
        let router = table();
        let resolution = router.resolve("/").unwrap();
        assert_eq!(resolution.page, Page::Dashboard);
        assert_eq!(resolution.redirected_from, vec!["/".to_string()]);
        assert!(!resolution.fell_back);
    }

    #[test]
    fn test_unmatched_path_uses_fallback() {
        let router = table();
        let resolution = router.resolve("/nonexistent").unwrap();
        assert_eq!(resolution.page, Page::Dashboard);
        assert!(resolution.fell_back);
        assert_eq!(resolution.redirected_from, vec!["/nonexistent".to_string()]);
    }

    #[test]
    fn test_fallback_page_renders_directly() {
        let router = Router::builder()
            .page("/home", Page::Dashboard)
            .fallback(Fallback::RenderPage(Page::Login))
            .build()
            .unwrap();

        let resolution = router.resolve("/missing").unwrap();
        assert_eq!(resolution.page, Page::Login);
        assert!(resolution.fell_back);
        assert!(resolution.redirected_from.is_empty());
    }

    #[test]
    fn test_missing_fallback_is_a_build_error() {
        let errors = Router::builder()
            .page("/home", Page::Dashboard)
            .build()
            .unwrap_err();
        assert!(errors.contains(&TableError::MissingFallback));
    }

    #[test]
    fn test_params_withheld_unless_exposed() {
        let router = Router::builder()
            .page("/tenants/:id", Page::TenantDetail)
            .fallback(Fallback::RenderPage(Page::Dashboard))
            .build()
            .unwrap();

        let resolution = router.resolve("/tenants/7").unwrap();
        assert_eq!(resolution.page, Page::TenantDetail);
        assert!(resolution.params.is_empty());
    }

    #[test]
    fn test_resolve_url_ignores_query_and_fragment() {
        let router = table();
        let url = Url::parse("https://console.example.com/users/42?tab=roles#top").unwrap();
        let resolution = router.resolve_url(&url).unwrap();
        assert_eq!(resolution.page, Page::UserDetail);
        assert_eq!(resolution.params.get("id"), Some("42"));
    }

    #[test]
    fn test_hop_limit_guards_resolution() {
        // Built directly to bypass validation; resolve must still terminate.
        let mut entries = Vec::new();
        for i in 0..12 {
            entries.push(
                RouteEntry::redirect(&format!("/hop{i}"), &format!("/hop{}", i + 1)).unwrap(),
            );
        }
        let router = Router {
            entries,
            fallback: Fallback::RenderPage(Page::Dashboard),
        };

        let err = router.resolve("/hop0").unwrap_err();
        assert_eq!(
            err,
            RouterError::RedirectLoop {
                path: "/hop0".into()
            }
        );
    }

    #[test]
    fn test_build_collects_pattern_errors() {
        let errors = Router::builder()
            .page("bad-pattern", Page::Dashboard)
            .fallback(Fallback::RenderPage(Page::Dashboard))
            .build()
            .unwrap_err();
        assert!(errors.iter().any(|e| matches!(e, TableError::Pattern(_))));
    }
}
