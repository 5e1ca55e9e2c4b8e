//! Snipbox web application library.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http::server (axum router + layers)    │
//!                           │        │                                  │
//!                           │        ▼                                  │
//!                           │   http::handlers (home, snippet view,    │
//!                           │                   create form, create)   │
//!                           │        │                                  │
//!     Client Response       │        ▼                                  │
//!     ◀─────────────────────┼─ templates::engine (startup-compiled     │
//!                           │                     tera template set)   │
//!                           │                                           │
//!                           │  Cross-cutting: config, observability,   │
//!                           │                 lifecycle                 │
//!                           └──────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod templates;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use templates::TemplateEngine;
