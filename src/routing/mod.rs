//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming path (navigation event, bookmark, programmatic redirect)
//!     → router.rs (first-match lookup, declaration order)
//!     → pattern.rs (segment matching, param capture)
//!     → Return: Resolution (page + params + metadata) or error
//!
//! Table Construction (at composition time):
//!     RouterBuilder entries
//!     → validation.rs (semantic checks, all errors at once)
//!     → Freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Table declared once, immutable at runtime
//! - No regex; segment-wise matching only
//! - Deterministic: same path always resolves the same way
//! - First match wins, in declaration order

pub mod entry;
pub mod pattern;
pub mod router;
pub mod validation;

pub use entry::{Domain, Layout, Page, RouteAction, RouteEntry, RouteMeta};
pub use pattern::{PathParams, PathPattern, PatternError};
pub use router::{Fallback, Resolution, Router, RouterBuilder, RouterError};
pub use validation::TableError;
