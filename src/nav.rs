//! Navigation chrome model.
//!
//! Derives the section list shown in the chrome from a built route table:
//! one section per domain tag, linking to the domain's listing page. Auth
//! pages (`hide_navigation`) never appear, and the active section of a
//! resolved route follows its domain tag.

use crate::routing::{Domain, Resolution, RouteAction, Router};

/// One chrome section, linking to a domain's listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSection {
    pub domain: Domain,
    pub title: String,
    pub href: String,
}

/// Ordered navigation sections derived from a route table.
#[derive(Debug, Clone, PartialEq)]
pub struct NavModel {
    sections: Vec<NavSection>,
}

impl NavModel {
    /// Build the section list from a router.
    ///
    /// For each domain, the first non-hidden render entry with a param-free
    /// pattern becomes the section link; table order determines section
    /// order.
    pub fn from_router(router: &Router) -> Self {
        let mut sections: Vec<NavSection> = Vec::new();

        for entry in router.entries() {
            if !matches!(entry.action(), RouteAction::Render { .. }) {
                continue;
            }
            if entry.meta().hide_navigation || entry.pattern().has_params() {
                continue;
            }
            let Some(domain) = entry.meta().domain else {
                continue;
            };
            if sections.iter().any(|section| section.domain == domain) {
                continue;
            }
            sections.push(NavSection {
                domain,
                title: entry
                    .meta()
                    .title
                    .clone()
                    .unwrap_or_else(|| domain.to_string()),
                href: entry.pattern().as_str().to_string(),
            });
        }

        Self { sections }
    }

    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Section to highlight for a resolved route.
    pub fn active_section(&self, resolution: &Resolution) -> Option<Domain> {
        resolution.meta.domain
    }
}
