pub mod health;
pub mod order;
pub mod round;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rounds                       list, create
/// /rounds/{id}                  get (with order count)
/// /rounds/{id}/lock             OPEN -> LOCKED (POST)
/// /rounds/{id}/close            OPEN|LOCKED -> CLOSED (POST)
/// /rounds/{id}/orders           orders for one round
///
/// /orders                       list (?round_id=), submit
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rounds", round::router())
        .nest("/orders", order::router())
}
