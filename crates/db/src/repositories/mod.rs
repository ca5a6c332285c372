//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod order_repo;
pub mod round_repo;

pub use order_repo::OrderRepo;
pub use round_repo::RoundRepo;
