//! Configuration schema definitions.
//!
//! This module defines the configuration structure for a console deployment.
//! All types derive Serde traits for deserialization from config files.
//! The fallback has no default on purpose: a config file must spell out
//! what an unregistered path does.

use serde::{Deserialize, Serialize};

use crate::profiles::Profile;
use crate::routing::{Fallback, Page, Router, TableError};

/// Root configuration for a console deployment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    /// Which route table to build.
    pub profile: Profile,

    /// Destination for unmatched paths. Required.
    pub fallback: FallbackConfig,

    /// Observability settings.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl ConsoleConfig {
    /// Compose the profile's table with the configured fallback.
    pub fn build_router(&self) -> Result<Router, Vec<TableError>> {
        self.profile
            .builder()
            .fallback(self.fallback.to_fallback())
            .build()
    }
}

/// Fallback declaration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FallbackConfig {
    /// Forward unmatched paths to a declared path.
    Redirect { to: String },
    /// Render a page directly.
    Page { page: Page },
}

impl FallbackConfig {
    pub fn to_fallback(&self) -> Fallback {
        match self {
            FallbackConfig::Redirect { to } => Fallback::RedirectTo(to.clone()),
            FallbackConfig::Page { page } => Fallback::RenderPage(*page),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            profile = "tenant"

            [fallback]
            kind = "redirect"
            to = "/login"
            "#,
        )
        .unwrap();

        assert_eq!(config.profile, Profile::Tenant);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(
            config.fallback.to_fallback(),
            Fallback::RedirectTo("/login".into())
        );
    }

    #[test]
    fn test_fallback_is_required() {
        let result: Result<ConsoleConfig, _> = toml::from_str(r#"profile = "full""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_fallback_parses() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            profile = "full"

            [fallback]
            kind = "page"
            page = "dashboard"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.fallback.to_fallback(),
            Fallback::RenderPage(Page::Dashboard)
        );
    }

    #[test]
    fn test_build_router_applies_profile_and_fallback() {
        let config: ConsoleConfig = toml::from_str(
            r#"
            profile = "tenant"

            [fallback]
            kind = "redirect"
            to = "/login"
            "#,
        )
        .unwrap();

        let router = config.build_router().unwrap();
        assert_eq!(router.entries().len(), 9);
        assert!(router.match_path("/groups").is_none());
    }
}
