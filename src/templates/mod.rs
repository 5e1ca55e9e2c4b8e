//! Server-side template rendering subsystem.
//!
//! # Data Flow
//! ```text
//! ui/html/*.html (fixed fragment set)
//!     → engine.rs (compile ONCE at startup into a tera set)
//!     → shared via Arc with the HTTP handlers
//!     → render page fragment per request (no re-parsing)
//! ```
//!
//! # Design Decisions
//! - Fragments compile once at startup and are reused across requests;
//!   per-request re-parsing is deliberately not done
//! - A fragment file absent at startup is a boundary failure: skipped with
//!   a warning, surfacing as a render error (HTTP 500) at request time
//! - A fragment that is present but fails to parse aborts startup

pub mod engine;

pub use engine::{TemplateEngine, TemplateError};
