//! Route definitions for the `/orders` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::order;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET    /?round_id=      -> list
/// POST   /                -> submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(order::list).post(order::submit))
}
