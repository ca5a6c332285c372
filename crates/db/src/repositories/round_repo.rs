//! Repository for the `rounds` table: creation, listing and lifecycle
//! transitions.

use haul_core::round::RoundTransition;
use haul_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::round::{CreateRound, Round, RoundSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, store, dropoff_point, notes, cutoff_time, max_orders, status, created_at";

/// Correlated order count appended to round queries.
const ORDER_COUNT: &str =
    "(SELECT COUNT(*) FROM orders o WHERE o.round_id = rounds.id) AS order_count";

/// Provides lifecycle operations for rounds.
pub struct RoundRepo;

impl RoundRepo {
    /// Validate and insert a new round in `OPEN` status, returning the
    /// created row.
    pub async fn create(pool: &PgPool, input: &CreateRound) -> Result<Round, RepoError> {
        let round = input.validate()?;
        let query = format!(
            "INSERT INTO rounds (title, store, dropoff_point, notes, cutoff_time, max_orders)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Round>(&query)
            .bind(&round.title)
            .bind(&round.store)
            .bind(&round.dropoff_point)
            .bind(&round.notes)
            .bind(round.cutoff_time)
            .bind(round.max_orders)
            .fetch_one(pool)
            .await?;
        Ok(created)
    }

    /// Find a round by ID, with its current order count.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RoundSummary>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS}, {ORDER_COUNT} FROM rounds WHERE id = $1");
        sqlx::query_as::<_, RoundSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rounds newest first (ties broken by id, descending), each
    /// with its current order count.
    pub async fn list(pool: &PgPool) -> Result<Vec<RoundSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS}, {ORDER_COUNT} FROM rounds ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, RoundSummary>(&query).fetch_all(pool).await
    }

    /// `OPEN -> LOCKED`. Returns `false` if the round is not open or does
    /// not exist.
    pub async fn lock(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::apply_transition(pool, id, RoundTransition::Lock).await
    }

    /// `{OPEN, LOCKED} -> CLOSED`. Returns `false` if the round is already
    /// closed or does not exist.
    pub async fn close(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::apply_transition(pool, id, RoundTransition::Close).await
    }

    /// Apply `transition` with a single conditional update. Only rows whose
    /// current status is one of the transition's sources are touched, so the
    /// statement itself rejects backward moves. The update takes the same
    /// row lock that order admission holds.
    pub async fn apply_transition(
        pool: &PgPool,
        id: DbId,
        transition: RoundTransition,
    ) -> Result<bool, sqlx::Error> {
        let sources = transition
            .sources()
            .iter()
            .map(|status| format!("'{}'", status.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        let query = format!("UPDATE rounds SET status = $2 WHERE id = $1 AND status IN ({sources})");
        let result = sqlx::query(&query)
            .bind(id)
            .bind(transition.target().as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
