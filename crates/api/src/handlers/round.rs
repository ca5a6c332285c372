//! Handlers for the `/rounds` resource.
//!
//! Lock and close answer `200` with `changed: false` when the round exists
//! but is past the transition's source states; only a missing round is an
//! error.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use haul_core::error::CoreError;
use haul_core::round::{RoundStatus, RoundTransition};
use haul_core::types::DbId;
use haul_db::models::order::Order;
use haul_db::models::round::{CreateRound, Round, RoundSummary};
use haul_db::repositories::{OrderRepo, RoundRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::DataResponse;
use crate::state::AppState;

/// Outcome of a lock/close request.
#[derive(Debug, Serialize)]
pub struct TransitionResult {
    pub id: DbId,
    /// Whether this request moved the round.
    pub changed: bool,
    /// Status after the request.
    pub status: RoundStatus,
}

fn round_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Round", id })
}

async fn find_round(state: &AppState, id: DbId) -> AppResult<RoundSummary> {
    RoundRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| round_not_found(id))
}

async fn run_transition(
    state: &AppState,
    id: DbId,
    transition: RoundTransition,
) -> AppResult<Json<DataResponse<TransitionResult>>> {
    let changed = RoundRepo::apply_transition(&state.pool, id, transition).await?;
    let round = find_round(state, id).await?;

    if changed {
        tracing::info!(
            round_id = id,
            transition = transition.name(),
            status = %round.round.status,
            "Round transitioned",
        );
    }

    Ok(Json(DataResponse {
        data: TransitionResult {
            id,
            changed,
            status: round.round.status,
        },
    }))
}

/// POST /api/v1/rounds
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateRound>,
) -> AppResult<(StatusCode, Json<DataResponse<Round>>)> {
    let round = RoundRepo::create(&state.pool, &input).await?;

    tracing::info!(
        round_id = round.id,
        title = %round.title,
        max_orders = round.max_orders,
        "Round created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: round })))
}

/// GET /api/v1/rounds
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<RoundSummary>>>> {
    let rounds = RoundRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: rounds }))
}

/// GET /api/v1/rounds/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<RoundSummary>>> {
    let round = find_round(&state, id).await?;
    Ok(Json(DataResponse { data: round }))
}

/// POST /api/v1/rounds/{id}/lock
pub async fn lock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TransitionResult>>> {
    run_transition(&state, id, RoundTransition::Lock).await
}

/// POST /api/v1/rounds/{id}/close
pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TransitionResult>>> {
    run_transition(&state, id, RoundTransition::Close).await
}

/// GET /api/v1/rounds/{id}/orders
pub async fn list_orders(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Order>>>> {
    find_round(&state, id).await?;
    let orders = OrderRepo::list(&state.pool, Some(id)).await?;
    Ok(Json(DataResponse { data: orders }))
}
