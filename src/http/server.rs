//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve static files
//! - Run the server with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::handlers;
use crate::templates::TemplateEngine;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Startup-compiled template set, shared across requests.
    pub templates: Arc<TemplateEngine>,
}

/// HTTP server for the application.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig, templates: Arc<TemplateEngine>) -> Self {
        let state = AppState { templates };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the axum router with all routes and middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/snippet/view/{id}", get(handlers::snippet_view))
            .route(
                "/snippet/create",
                get(handlers::snippet_create).post(handlers::snippet_create_post),
            )
            .nest_service("/static", ServeDir::new(&config.ui.static_dir))
            .fallback(handlers::fallback)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener until a
    /// shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
