//! Request handlers.
//!
//! Each handler is stateless and terminal within a single request/response
//! cycle: it either fully succeeds or fully fails, with nothing written
//! after an error response.

use axum::extract::{Path, State};
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::http::response::{internal_server_error, not_found};
use crate::http::server::AppState;
use crate::templates::engine::HOME_PAGE;

/// Value of the `Server` identification header on the home route.
pub const SERVER_IDENT: &str = concat!("snipbox/", env!("CARGO_PKG_VERSION"));

/// `GET /` — render the home page from the startup-compiled template set.
pub async fn home(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    let html = match state.templates.render_page(HOME_PAGE) {
        Ok(html) => html,
        Err(err) => {
            tracing::error!(error = %err, method = %method, uri = %uri, "Template render failed");
            return internal_server_error();
        }
    };

    let mut response = Html(html).into_response();
    response
        .headers_mut()
        .insert(header::SERVER, HeaderValue::from_static(SERVER_IDENT));
    response
}

/// `GET /snippet/view/{id}` — placeholder view for a single snippet.
pub async fn snippet_view(Path(id): Path<String>) -> Response {
    let Some(id) = parse_snippet_id(&id) else {
        return not_found();
    };
    format!("Display a specific snippet with ID {id}...").into_response()
}

/// `GET /snippet/create` — placeholder for the creation form.
pub async fn snippet_create() -> Response {
    "Display a form for creating a new snippet...".into_response()
}

/// `POST /snippet/create` — placeholder for form submission.
pub async fn snippet_create_post() -> Response {
    (StatusCode::CREATED, "Save a new snippet...").into_response()
}

/// Fallback for unmatched routes.
pub async fn fallback() -> Response {
    not_found()
}

/// Parse a snippet id path segment. Valid ids are base-10 integers ≥ 1.
fn parse_snippet_id(raw: &str) -> Option<u64> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Some(id as u64),
        _ => None,
    }
}
