//! Route table core for a multi-tenant admin console.
//!
//! Declares the static mapping from URL path patterns to page references and
//! typed display metadata, and resolves incoming paths against it:
//! first match wins in declaration order, redirect entries forward instead
//! of rendering, and unmatched paths go to an explicitly configured
//! fallback. Two build profiles (full admin console, reduced tenant console)
//! share the machinery and are selected at composition time.
//!
//! ```
//! use console_router::profiles::Profile;
//! use console_router::routing::{Fallback, Page};
//!
//! let router = Profile::Full
//!     .builder()
//!     .fallback(Fallback::RedirectTo("/home".into()))
//!     .build()
//!     .unwrap();
//!
//! let resolution = router.resolve("/users/42").unwrap();
//! assert_eq!(resolution.page, Page::UserDetail);
//! assert_eq!(resolution.params.get("id"), Some("42"));
//! ```

pub mod config;
pub mod nav;
pub mod observability;
pub mod profiles;
pub mod routing;

pub use config::ConsoleConfig;
pub use profiles::Profile;
pub use routing::{Fallback, Resolution, Router, RouterBuilder};
pub use url::Url;
