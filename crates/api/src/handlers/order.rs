//! Handlers for the `/orders` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use haul_db::models::order::{CreateOrder, Order, OrderListQuery};
use haul_db::repositories::OrderRepo;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/orders
///
/// Admit an order into its round. Rejections come back as 404 (no such
/// round), 409 `INVALID_STATE` (round not open) or 409 `CAPACITY_REACHED`.
pub async fn submit(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateOrder>,
) -> AppResult<(StatusCode, Json<DataResponse<Order>>)> {
    let order = OrderRepo::submit(&state.pool, &input).await?;

    tracing::info!(
        order_id = order.id,
        round_id = order.round_id,
        "Order admitted",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// GET /api/v1/orders
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrderListQuery>,
) -> AppResult<Json<DataResponse<Vec<Order>>>> {
    let orders = OrderRepo::list(&state.pool, params.round_id).await?;
    Ok(Json(DataResponse { data: orders }))
}
