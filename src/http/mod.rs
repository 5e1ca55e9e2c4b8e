//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware layers, dispatch)
//!     → handlers.rs (home, snippet view, create form, create submit)
//!     → response.rs (shared status/body helpers)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
