/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally. This pool is
/// the only shared resource; every request coordinates through the database.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: haul_db::DbPool,
}
