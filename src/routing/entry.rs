//! Route entry definitions.
//!
//! # Responsibilities
//! - Name the console pages a route can render
//! - Carry typed display metadata (title, layout, domain tag)
//! - Distinguish render entries from redirect entries
//!
//! # Design Decisions
//! - Metadata is a closed struct, not an open key/value bag
//! - Unset fields default explicitly (no hidden fallbacks)
//! - Redirect entries carry no metadata of their own

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::routing::pattern::{PathPattern, PatternError};

/// Console page references, one per renderable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Login,
    Logout,
    Signup,
    Groups,
    GroupDetail,
    Tenants,
    TenantDetail,
    Workspaces,
    WorkspaceDetail,
    Namespaces,
    NamespaceDetail,
    EntityTypes,
    EntityTypeDetail,
    EntityRecords,
    EntityRecordDetail,
    Users,
    UserDetail,
    UserProfile,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Login => "login",
            Page::Logout => "logout",
            Page::Signup => "signup",
            Page::Groups => "groups",
            Page::GroupDetail => "group-detail",
            Page::Tenants => "tenants",
            Page::TenantDetail => "tenant-detail",
            Page::Workspaces => "workspaces",
            Page::WorkspaceDetail => "workspace-detail",
            Page::Namespaces => "namespaces",
            Page::NamespaceDetail => "namespace-detail",
            Page::EntityTypes => "entity-types",
            Page::EntityTypeDetail => "entity-type-detail",
            Page::EntityRecords => "entity-records",
            Page::EntityRecordDetail => "entity-record-detail",
            Page::Users => "users",
            Page::UserDetail => "user-detail",
            Page::UserProfile => "user-profile",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering shell for a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Standard,
    Auth,
}

/// Business-area tag used for active-section highlighting in the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Groups,
    Tenants,
    Workspaces,
    Namespaces,
    EntityTypes,
    EntityRecords,
    Users,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Groups => "groups",
            Domain::Tenants => "tenants",
            Domain::Workspaces => "workspaces",
            Domain::Namespaces => "namespaces",
            Domain::EntityTypes => "entity-types",
            Domain::EntityRecords => "entity-records",
            Domain::Users => "users",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata attached to a route entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteMeta {
    /// Page heading.
    pub title: Option<String>,

    /// Suppress the navigation chrome entirely.
    pub hide_navigation: bool,

    /// Rendering shell.
    pub layout: Layout,

    /// Business-area tag for section highlighting.
    pub domain: Option<Domain>,
}

/// What a matched entry does: render a page or forward elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum RouteAction {
    Render {
        page: Page,
        /// Pass captured path parameters through to the page.
        expose_params: bool,
    },
    Redirect {
        to: String,
    },
}

/// One row of the route table.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    pattern: PathPattern,
    action: RouteAction,
    meta: RouteMeta,
}

impl RouteEntry {
    /// Entry that renders a page when its pattern matches.
    pub fn page(pattern: &str, page: Page) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            action: RouteAction::Render {
                page,
                expose_params: false,
            },
            meta: RouteMeta::default(),
        })
    }

    /// Entry that forwards navigation to another path.
    pub fn redirect(pattern: &str, to: &str) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            action: RouteAction::Redirect { to: to.to_string() },
            meta: RouteMeta::default(),
        })
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.meta.title = Some(title.to_string());
        self
    }

    /// Auth shell: no chrome, auth layout.
    pub fn auth_layout(mut self) -> Self {
        self.meta.hide_navigation = true;
        self.meta.layout = Layout::Auth;
        self
    }

    pub fn in_domain(mut self, domain: Domain) -> Self {
        self.meta.domain = Some(domain);
        self
    }

    /// Forward captured parameters to the page. No effect on redirects.
    pub fn with_params(mut self) -> Self {
        if let RouteAction::Render { expose_params, .. } = &mut self.action {
            *expose_params = true;
        }
        self
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn action(&self) -> &RouteAction {
        &self.action
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }
}
