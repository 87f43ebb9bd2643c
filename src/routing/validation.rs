//! Route table validation.
//!
//! # Responsibilities
//! - Semantic validation (pattern syntax is checked at parse time)
//! - Check referential integrity (redirect targets resolve to entries)
//! - Detect conflicting and self-defeating entries
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the declared table
//! - Runs once at build time; a built router is always valid

use thiserror::Error;

use crate::routing::entry::{RouteAction, RouteEntry};
use crate::routing::pattern::PatternError;
use crate::routing::router::{Fallback, MAX_REDIRECT_HOPS};

/// Error type for table validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("pattern `{0}` is declared more than once")]
    DuplicatePattern(String),

    #[error("the root entry `/` must redirect, not render")]
    RootRenders,

    #[error("redirect from `{from}` targets `{to}`, which matches no entry")]
    UnknownRedirectTarget { from: String, to: String },

    #[error("redirects starting at `{start}` form a loop")]
    RedirectLoop { start: String },

    #[error("redirect chain starting at `{start}` exceeds {MAX_REDIRECT_HOPS} hops")]
    RedirectChainTooLong { start: String },

    #[error("fallback redirects to `{to}`, which matches no entry")]
    FallbackTargetUnmatched { to: String },

    #[error("entry `{pattern}` exposes params but its pattern has none")]
    NeedlessExposeParams { pattern: String },

    #[error("no fallback declared; unmatched paths must have an explicit destination")]
    MissingFallback,
}

/// Validate a declared route table against its fallback policy.
pub fn validate_table(
    entries: &[RouteEntry],
    fallback: Option<&Fallback>,
) -> Result<(), Vec<TableError>> {
    let mut errors = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let pattern = entry.pattern().as_str();

        if entries[..index]
            .iter()
            .any(|earlier| earlier.pattern().as_str() == pattern)
        {
            errors.push(TableError::DuplicatePattern(pattern.to_string()));
        }

        match entry.action() {
            RouteAction::Render { expose_params, .. } => {
                if pattern == "/" {
                    errors.push(TableError::RootRenders);
                }
                if *expose_params && !entry.pattern().has_params() {
                    errors.push(TableError::NeedlessExposeParams {
                        pattern: pattern.to_string(),
                    });
                }
            }
            RouteAction::Redirect { to } => {
                check_redirect_chain(entries, pattern, to, &mut errors);
            }
        }
    }

    match fallback {
        None => errors.push(TableError::MissingFallback),
        Some(Fallback::RedirectTo(to)) => {
            if first_match(entries, to).is_none() {
                errors.push(TableError::FallbackTargetUnmatched { to: to.clone() });
            }
        }
        Some(Fallback::RenderPage(_)) => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// First entry whose pattern matches `path`, declaration order.
fn first_match<'a>(entries: &'a [RouteEntry], path: &str) -> Option<&'a RouteEntry> {
    entries
        .iter()
        .find(|entry| entry.pattern().matches(path).is_some())
}

/// Follow a redirect chain from `start`, recording dead targets and loops.
fn check_redirect_chain(
    entries: &[RouteEntry],
    start: &str,
    first_target: &str,
    errors: &mut Vec<TableError>,
) {
    let mut visited = vec![start.to_string()];
    let mut target = first_target.to_string();

    for hop in 0.. {
        if hop >= MAX_REDIRECT_HOPS {
            errors.push(TableError::RedirectChainTooLong {
                start: start.to_string(),
            });
            return;
        }

        let entry = match first_match(entries, &target) {
            Some(entry) => entry,
            None => {
                // Only reported for the immediate target; further dead links
                // are reported by the entry that owns them.
                if hop == 0 {
                    errors.push(TableError::UnknownRedirectTarget {
                        from: start.to_string(),
                        to: target,
                    });
                }
                return;
            }
        };

        match entry.action() {
            RouteAction::Render { .. } => return,
            RouteAction::Redirect { to } => {
                if visited.iter().any(|seen| seen == entry.pattern().as_str()) {
                    errors.push(TableError::RedirectLoop {
                        start: start.to_string(),
                    });
                    return;
                }
                visited.push(entry.pattern().as_str().to_string());
                target = to.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::entry::Page;

    fn page(pattern: &str, page_ref: Page) -> RouteEntry {
        RouteEntry::page(pattern, page_ref).unwrap()
    }

    fn redirect(pattern: &str, to: &str) -> RouteEntry {
        RouteEntry::redirect(pattern, to).unwrap()
    }

    fn fallback() -> Fallback {
        Fallback::RenderPage(Page::Dashboard)
    }

    #[test]
    fn test_valid_table_passes() {
        let entries = vec![
            redirect("/", "/home"),
            page("/home", Page::Dashboard),
            page("/users/:id", Page::UserDetail).with_params(),
        ];
        assert!(validate_table(&entries, Some(&fallback())).is_ok());
    }

    #[test]
    fn test_duplicate_pattern() {
        let entries = vec![page("/home", Page::Dashboard), page("/home", Page::Login)];
        let errors = validate_table(&entries, Some(&fallback())).unwrap_err();
        assert!(errors.contains(&TableError::DuplicatePattern("/home".into())));
    }

    #[test]
    fn test_root_must_redirect() {
        let entries = vec![page("/", Page::Dashboard)];
        let errors = validate_table(&entries, Some(&fallback())).unwrap_err();
        assert!(errors.contains(&TableError::RootRenders));
    }

    #[test]
    fn test_unknown_redirect_target() {
        let entries = vec![redirect("/", "/missing"), page("/home", Page::Dashboard)];
        let errors = validate_table(&entries, Some(&fallback())).unwrap_err();
        assert!(errors.contains(&TableError::UnknownRedirectTarget {
            from: "/".into(),
            to: "/missing".into(),
        }));
    }

    #[test]
    fn test_redirect_loop() {
        let entries = vec![redirect("/a", "/b"), redirect("/b", "/a")];
        let errors = validate_table(&entries, Some(&fallback())).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, TableError::RedirectLoop { .. })));
    }

    #[test]
    fn test_redirect_chain_too_long() {
        let mut entries = Vec::new();
        for i in 0..10 {
            entries.push(redirect(&format!("/hop{i}"), &format!("/hop{}", i + 1)));
        }
        entries.push(page("/hop10", Page::Dashboard));
        let errors = validate_table(&entries, Some(&fallback())).unwrap_err();
        assert!(errors.contains(&TableError::RedirectChainTooLong {
            start: "/hop0".into()
        }));
    }

    #[test]
    fn test_fallback_target_must_match() {
        let entries = vec![page("/home", Page::Dashboard)];
        let bad = Fallback::RedirectTo("/nowhere".into());
        let errors = validate_table(&entries, Some(&bad)).unwrap_err();
        assert!(errors.contains(&TableError::FallbackTargetUnmatched {
            to: "/nowhere".into()
        }));
    }

    #[test]
    fn test_missing_fallback() {
        let entries = vec![page("/home", Page::Dashboard)];
        let errors = validate_table(&entries, None).unwrap_err();
        assert!(errors.contains(&TableError::MissingFallback));
    }

    #[test]
    fn test_needless_expose_params() {
        let entries = vec![page("/users", Page::Users).with_params()];
        let errors = validate_table(&entries, Some(&fallback())).unwrap_err();
        assert!(errors.contains(&TableError::NeedlessExposeParams {
            pattern: "/users".into()
        }));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let entries = vec![
            page("/", Page::Dashboard),
            page("/home", Page::Dashboard),
            page("/home", Page::Login),
        ];
        let errors = validate_table(&entries, None).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
