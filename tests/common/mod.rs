//! Shared fixtures for integration tests.

use console_router::profiles::Profile;
use console_router::routing::{Fallback, Router};

/// Full admin console, unmatched paths forwarded to the dashboard.
pub fn full_router() -> Router {
    Profile::Full
        .builder()
        .fallback(Fallback::RedirectTo("/home".into()))
        .build()
        .unwrap()
}

/// Tenant console, unmatched paths forwarded to login.
#[allow(dead_code)]
pub fn tenant_router() -> Router {
    Profile::Tenant
        .builder()
        .fallback(Fallback::RedirectTo("/login".into()))
        .build()
        .unwrap()
}
