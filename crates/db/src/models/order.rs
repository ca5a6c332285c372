//! Order entity model and DTOs.

use haul_core::admission::resolve_qty;
use haul_core::error::CoreError;
use haul_core::types::{DbId, Timestamp};
use haul_core::validation::{optional_text, require, require_text};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An order row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub round_id: DbId,
    pub buyer_name: String,
    pub item: String,
    pub qty: i32,
    pub size: Option<String>,
    pub sweetness: Option<String>,
    pub ice: Option<String>,
    pub remark: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for submitting an order to a round.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrder {
    pub round_id: Option<DbId>,
    pub buyer_name: Option<String>,
    pub item: Option<String>,
    /// Defaults to 1 if omitted.
    pub qty: Option<i32>,
    pub size: Option<String>,
    pub sweetness: Option<String>,
    pub ice: Option<String>,
    pub remark: Option<String>,
}

/// A validated [`CreateOrder`]. Admission against the round still has to
/// happen inside the insert transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub round_id: DbId,
    pub buyer_name: String,
    pub item: String,
    pub qty: i32,
    pub size: Option<String>,
    pub sweetness: Option<String>,
    pub ice: Option<String>,
    pub remark: Option<String>,
}

impl CreateOrder {
    pub fn validate(&self) -> Result<NewOrder, CoreError> {
        Ok(NewOrder {
            round_id: require("round_id", self.round_id)?,
            buyer_name: require_text("buyer_name", self.buyer_name.as_deref())?,
            item: require_text("item", self.item.as_deref())?,
            qty: resolve_qty(self.qty)?,
            size: optional_text(self.size.as_deref()),
            sweetness: optional_text(self.sweetness.as_deref()),
            ice: optional_text(self.ice.as_deref()),
            remark: optional_text(self.remark.as_deref()),
        })
    }
}

/// Query parameters for `GET /orders`.
#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub round_id: Option<DbId>,
}
