//! Round entity model and DTOs.

use haul_core::error::CoreError;
use haul_core::round::{resolve_max_orders, RoundStatus};
use haul_core::types::{deserialize_optional_timestamp, DbId, Timestamp};
use haul_core::validation::{optional_text, require, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A round row from the `rounds` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Round {
    pub id: DbId,
    pub title: String,
    pub store: Option<String>,
    pub dropoff_point: Option<String>,
    pub notes: Option<String>,
    pub cutoff_time: Timestamp,
    pub max_orders: i32,
    #[sqlx(try_from = "String")]
    pub status: RoundStatus,
    pub created_at: Timestamp,
}

/// A round together with the number of orders currently referencing it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoundSummary {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub round: Round,
    pub order_count: i64,
}

/// DTO for creating a new round.
///
/// Every field is optional at the wire level so that a missing `title` or
/// `cutoff_time` surfaces as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRound {
    pub title: Option<String>,
    pub store: Option<String>,
    pub dropoff_point: Option<String>,
    pub notes: Option<String>,
    /// RFC 3339, or `YYYY-MM-DD HH:MM:SS` read as UTC.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub cutoff_time: Option<Timestamp>,
    /// Absent or 0 means the default capacity.
    pub max_orders: Option<i32>,
}

/// A validated [`CreateRound`], ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRound {
    pub title: String,
    pub store: Option<String>,
    pub dropoff_point: Option<String>,
    pub notes: Option<String>,
    pub cutoff_time: Timestamp,
    pub max_orders: i32,
}

impl CreateRound {
    pub fn validate(&self) -> Result<NewRound, CoreError> {
        Ok(NewRound {
            title: require_text("title", self.title.as_deref())?,
            store: optional_text(self.store.as_deref()),
            dropoff_point: optional_text(self.dropoff_point.as_deref()),
            notes: optional_text(self.notes.as_deref()),
            cutoff_time: require("cutoff_time", self.cutoff_time)?,
            max_orders: resolve_max_orders(self.max_orders)?,
        })
    }
}
