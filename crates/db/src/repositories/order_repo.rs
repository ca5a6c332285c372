//! Repository for the `orders` table, including transactional admission.

use haul_core::admission::check_admission;
use haul_core::error::CoreError;
use haul_core::round::RoundStatus;
use haul_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::error::RepoError;
use crate::models::order::{CreateOrder, Order};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, round_id, buyer_name, item, qty, size, sweetness, ice, remark, created_at";

/// The slice of a locked round row that admission needs.
#[derive(Debug, FromRow)]
struct AdmissionRow {
    #[sqlx(try_from = "String")]
    status: RoundStatus,
    max_orders: i32,
}

/// Provides admission and listing for orders.
pub struct OrderRepo;

impl OrderRepo {
    /// Admit an order into its round, returning the created row.
    ///
    /// Runs in one transaction that first takes `FOR UPDATE` on the round
    /// row. Concurrent submissions to the same round, and concurrent
    /// lock/close updates, queue behind that lock, so the status check, the
    /// count and the insert are evaluated against a state nobody else can
    /// change until commit. Any early return drops the transaction, which
    /// rolls it back.
    pub async fn submit(pool: &PgPool, input: &CreateOrder) -> Result<Order, RepoError> {
        let order = input.validate()?;
        let mut tx = pool.begin().await?;

        let round = sqlx::query_as::<_, AdmissionRow>(
            "SELECT status, max_orders FROM rounds WHERE id = $1 FOR UPDATE",
        )
        .bind(order.round_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Round",
            id: order.round_id,
        })?;

        let (current_count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM orders WHERE round_id = $1")
                .bind(order.round_id)
                .fetch_one(&mut *tx)
                .await?;

        check_admission(order.round_id, round.status, current_count, round.max_orders)?;

        let query = format!(
            "INSERT INTO orders (round_id, buyer_name, item, qty, size, sweetness, ice, remark)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Order>(&query)
            .bind(order.round_id)
            .bind(&order.buyer_name)
            .bind(&order.item)
            .bind(order.qty)
            .bind(&order.size)
            .bind(&order.sweetness)
            .bind(&order.ice)
            .bind(&order.remark)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// List orders newest first (ties broken by id, descending), optionally
    /// restricted to one round.
    pub async fn list(pool: &PgPool, round_id: Option<DbId>) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders
             WHERE ($1::BIGINT IS NULL OR round_id = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(round_id)
            .fetch_all(pool)
            .await
    }
}
