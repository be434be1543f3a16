//! Professor CRUD routes: `/professor` and `/professor/:id`.

use crate::handlers::{create, delete as delete_handler, list, method_not_allowed, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn professor_routes(state: AppState) -> Router {
    Router::new()
        .route("/professor", get(list).post(create).fallback(method_not_allowed))
        .route(
            "/professor/:id",
            get(read)
                .put(update)
                .delete(delete_handler)
                .fallback(method_not_allowed),
        )
        .with_state(state)
}
