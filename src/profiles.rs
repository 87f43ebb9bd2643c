//! Build profiles.
//!
//! The console ships in two configurations built from one codebase: the
//! full administration console and a reduced tenant-management console.
//! Each profile is a complete route table declaration; which one is built
//! is decided at composition time, never at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::routing::{Domain, Page, RouterBuilder};

/// Named build profile selecting one of the two route tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Full administration console.
    Full,
    /// Reduced tenant/user-only console.
    Tenant,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile `{0}`, expected `full` or `tenant`")]
pub struct UnknownProfile(String);

impl Profile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Profile::Full => "full",
            Profile::Tenant => "tenant",
        }
    }

    /// Route table builder for this profile. The caller still has to pick
    /// a fallback before building.
    pub fn builder(self) -> RouterBuilder {
        match self {
            Profile::Full => full_console(),
            Profile::Tenant => tenant_console(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Profile::Full),
            "tenant" => Ok(Profile::Tenant),
            other => Err(UnknownProfile(other.to_string())),
        }
    }
}

/// Route table of the full administration console.
///
/// Declaration order is load-bearing: `/users/me` must precede `/users/:id`.
pub fn full_console() -> RouterBuilder {
    RouterBuilder::new()
        .redirect("/", "/home")
        .page("/home", Page::Dashboard)
        .titled("Home")
        .page("/login", Page::Login)
        .auth()
        .page("/logout", Page::Logout)
        .auth()
        .page("/signup", Page::Signup)
        .auth()
        .page("/groups", Page::Groups)
        .domain(Domain::Groups)
        .titled("Groups")
        .page("/groups/:id", Page::GroupDetail)
        .expose_params()
        .domain(Domain::Groups)
        .titled("Group Detail")
        .page("/tenants", Page::Tenants)
        .domain(Domain::Tenants)
        .titled("Tenants")
        .page("/tenants/:id", Page::TenantDetail)
        .expose_params()
        .domain(Domain::Tenants)
        .titled("Tenant Detail")
        .page("/workspaces", Page::Workspaces)
        .domain(Domain::Workspaces)
        .titled("Workspaces")
        .page("/workspaces/:id", Page::WorkspaceDetail)
        .expose_params()
        .domain(Domain::Workspaces)
        .titled("Workspace Detail")
        .page("/namespaces", Page::Namespaces)
        .domain(Domain::Namespaces)
        .titled("Namespaces")
        .page("/namespaces/:id", Page::NamespaceDetail)
        .expose_params()
        .domain(Domain::Namespaces)
        .titled("Namespace Detail")
        .page("/entity-types", Page::EntityTypes)
        .domain(Domain::EntityTypes)
        .titled("Entity Types")
        .page("/entity-types/:id", Page::EntityTypeDetail)
        .expose_params()
        .domain(Domain::EntityTypes)
        .titled("Entity Type Detail")
        .page("/entity-records", Page::EntityRecords)
        .domain(Domain::EntityRecords)
        .titled("Entity Records")
        .page("/entity-records/:id", Page::EntityRecordDetail)
        .expose_params()
        .domain(Domain::EntityRecords)
        .titled("Entity Record Detail")
        .page("/users", Page::Users)
        .domain(Domain::Users)
        .titled("Users")
        .page("/users/me", Page::UserProfile)
        .domain(Domain::Users)
        .titled("My Account")
        .page("/users/:id", Page::UserDetail)
        .expose_params()
        .domain(Domain::Users)
        .titled("User Detail")
}

/// Route table of the reduced tenant-management console.
pub fn tenant_console() -> RouterBuilder {
    RouterBuilder::new()
        .redirect("/", "/login")
        .page("/login", Page::Login)
        .auth()
        .page("/logout", Page::Logout)
        .auth()
        .page("/signup", Page::Signup)
        .auth()
        .page("/tenants", Page::Tenants)
        .domain(Domain::Tenants)
        .titled("Tenants")
        .page("/tenants/:id", Page::TenantDetail)
        .expose_params()
        .domain(Domain::Tenants)
        .titled("Tenant Detail")
        .page("/users", Page::Users)
        .domain(Domain::Users)
        .titled("Users")
        .page("/users/me", Page::UserProfile)
        .domain(Domain::Users)
        .titled("My Account")
        .page("/users/:id", Page::UserDetail)
        .expose_params()
        .domain(Domain::Users)
        .titled("User Detail")
}
