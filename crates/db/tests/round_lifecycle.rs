//! Integration tests for round creation, listing and lifecycle transitions.

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use haul_core::error::CoreError;
use haul_core::round::{RoundStatus, DEFAULT_MAX_ORDERS};
use haul_db::error::RepoError;
use haul_db::models::order::CreateOrder;
use haul_db::models::round::CreateRound;
use haul_db::repositories::{OrderRepo, RoundRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_round(title: &str, max_orders: Option<i32>) -> CreateRound {
    CreateRound {
        title: Some(title.to_string()),
        cutoff_time: Some(Utc::now() + Duration::hours(2)),
        max_orders,
        ..Default::default()
    }
}

fn new_order(round_id: i64, buyer: &str) -> CreateOrder {
    CreateOrder {
        round_id: Some(round_id),
        buyer_name: Some(buyer.to_string()),
        item: Some("Milk Tea".to_string()),
        ..Default::default()
    }
}

async fn status_of(pool: &PgPool, id: i64) -> RoundStatus {
    RoundRepo::find_by_id(pool, id)
        .await
        .unwrap()
        .expect("round should exist")
        .round
        .status
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_round_starts_open_with_defaults(pool: PgPool) {
    let round = RoundRepo::create(&pool, &new_round("Bubble Tea", None))
        .await
        .unwrap();

    assert!(round.id > 0);
    assert_eq!(round.status, RoundStatus::Open);
    assert_eq!(round.max_orders, DEFAULT_MAX_ORDERS);
    assert_eq!(round.store, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_round_zero_capacity_uses_default(pool: PgPool) {
    let round = RoundRepo::create(&pool, &new_round("Snacks", Some(0)))
        .await
        .unwrap();
    assert_eq!(round.max_orders, DEFAULT_MAX_ORDERS);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_round_without_title_is_validation_error(pool: PgPool) {
    let mut input = new_round("", None);
    input.title = Some("   ".into());

    let result = RoundRepo::create(&pool, &input).await;
    assert_matches!(result, Err(RepoError::Core(CoreError::Validation(_))));

    let rounds = RoundRepo::list(&pool).await.unwrap();
    assert!(rounds.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_round_without_cutoff_is_validation_error(pool: PgPool) {
    let mut input = new_round("Coffee", None);
    input.cutoff_time = None;

    let result = RoundRepo::create(&pool, &input).await;
    assert_matches!(result, Err(RepoError::Core(CoreError::Validation(_))));
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_rounds_newest_first(pool: PgPool) {
    let a = RoundRepo::create(&pool, &new_round("A", None)).await.unwrap();
    let b = RoundRepo::create(&pool, &new_round("B", None)).await.unwrap();

    let ids: Vec<i64> = RoundRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.round.id)
        .collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_rounds_ties_broken_by_id(pool: PgPool) {
    let a = RoundRepo::create(&pool, &new_round("A", None)).await.unwrap();
    let b = RoundRepo::create(&pool, &new_round("B", None)).await.unwrap();
    sqlx::query("UPDATE rounds SET created_at = $1")
        .bind(Utc::now())
        .execute(&pool)
        .await
        .unwrap();

    let ids: Vec<i64> = RoundRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.round.id)
        .collect();
    assert_eq!(ids, vec![b.id, a.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_order_count_matches_orders(pool: PgPool) {
    let busy = RoundRepo::create(&pool, &new_round("Busy", None)).await.unwrap();
    let quiet = RoundRepo::create(&pool, &new_round("Quiet", None)).await.unwrap();
    for buyer in ["Alice", "Bob", "Cara"] {
        OrderRepo::submit(&pool, &new_order(busy.id, buyer)).await.unwrap();
    }

    let rounds = RoundRepo::list(&pool).await.unwrap();
    for summary in rounds {
        let orders = OrderRepo::list(&pool, Some(summary.round.id)).await.unwrap();
        assert_eq!(summary.order_count, orders.len() as i64);
    }

    let quiet = RoundRepo::find_by_id(&pool, quiet.id).await.unwrap().unwrap();
    assert_eq!(quiet.order_count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_round_returns_none(pool: PgPool) {
    assert!(RoundRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Lock / close
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lock_only_once(pool: PgPool) {
    let round = RoundRepo::create(&pool, &new_round("Lunch", None)).await.unwrap();

    assert!(RoundRepo::lock(&pool, round.id).await.unwrap());
    assert_eq!(status_of(&pool, round.id).await, RoundStatus::Locked);

    assert!(!RoundRepo::lock(&pool, round.id).await.unwrap());
    assert_eq!(status_of(&pool, round.id).await, RoundStatus::Locked);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_close_from_open(pool: PgPool) {
    let round = RoundRepo::create(&pool, &new_round("Lunch", None)).await.unwrap();

    assert!(RoundRepo::close(&pool, round.id).await.unwrap());
    assert_eq!(status_of(&pool, round.id).await, RoundStatus::Closed);
    assert!(!RoundRepo::close(&pool, round.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_close_from_locked_then_nothing_reopens(pool: PgPool) {
    let round = RoundRepo::create(&pool, &new_round("Lunch", None)).await.unwrap();

    assert!(RoundRepo::lock(&pool, round.id).await.unwrap());
    assert!(RoundRepo::close(&pool, round.id).await.unwrap());

    assert!(!RoundRepo::lock(&pool, round.id).await.unwrap());
    assert!(!RoundRepo::close(&pool, round.id).await.unwrap());
    assert_eq!(status_of(&pool, round.id).await, RoundStatus::Closed);

    let result = OrderRepo::submit(&pool, &new_order(round.id, "Late")).await;
    assert_matches!(
        result,
        Err(RepoError::Core(CoreError::InvalidState { status: RoundStatus::Closed, .. }))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transitions_on_missing_round_report_no_change(pool: PgPool) {
    assert!(!RoundRepo::lock(&pool, 424_242).await.unwrap());
    assert!(!RoundRepo::close(&pool, 424_242).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_backward_status_write_rejected_by_database(pool: PgPool) {
    let round = RoundRepo::create(&pool, &new_round("Lunch", None)).await.unwrap();
    RoundRepo::close(&pool, round.id).await.unwrap();

    let result = sqlx::query("UPDATE rounds SET status = 'OPEN' WHERE id = $1")
        .bind(round.id)
        .execute(&pool)
        .await;
    assert!(result.is_err());
    assert_eq!(status_of(&pool, round.id).await, RoundStatus::Closed);
}
