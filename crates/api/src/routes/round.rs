//! Route definitions for the `/rounds` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::round;
use crate::state::AppState;

/// Routes mounted at `/rounds`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// POST   /{id}/lock       -> lock
/// POST   /{id}/close      -> close
/// GET    /{id}/orders     -> list_orders
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(round::list).post(round::create))
        .route("/{id}", get(round::get_by_id))
        .route("/{id}/lock", post(round::lock))
        .route("/{id}/close", post(round::close))
        .route("/{id}/orders", get(round::list_orders))
}
