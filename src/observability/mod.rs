//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; text for development, JSON for machines
//! - `RUST_LOG` overrides the configured level when set
//! - Request IDs flow through the tower-http request-id layers

pub mod logging;
