//! Router assembly: operational routes plus the professor resource.

mod common;
mod professor;
pub use common::common_routes_with_ready;
pub use professor::professor_routes;

use crate::handlers::no_route;
use crate::response::collapse_error_status;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Largest accepted request body. Oversized bodies are rejected by the `JsonBody` extractor as a decode error.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application router. In compat mode every error from the professor routes leaves as 400.
pub fn app(state: AppState) -> Router {
    let mut api = professor_routes(state.clone()).fallback(no_route);
    if state.api.wire_compat {
        api = api.layer(middleware::from_fn(collapse_error_status));
    }

    Router::new()
        .merge(common_routes_with_ready(state))
        .merge(api)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES)),
        )
}
