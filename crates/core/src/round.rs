//! Round lifecycle state machine.
//!
//! A round starts `OPEN`, may be `LOCKED` to stop new orders, and ends
//! `CLOSED`. Transitions only move forward. The legal source states for each
//! transition are defined here once; the repository renders them into the
//! `WHERE` clause of its conditional update so the database enforces them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Capacity used when a round is created without `max_orders` (or with 0).
pub const DEFAULT_MAX_ORDERS: i32 = 10;

/// Lifecycle status of a round. Stored as upper-case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoundStatus {
    Open,
    Locked,
    Closed,
}

impl RoundStatus {
    pub const ALL: [RoundStatus; 3] = [RoundStatus::Open, RoundStatus::Locked, RoundStatus::Closed];

    /// The database / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            RoundStatus::Open => "OPEN",
            RoundStatus::Locked => "LOCKED",
            RoundStatus::Closed => "CLOSED",
        }
    }

    /// Only open rounds admit new orders.
    pub fn accepts_orders(self) -> bool {
        self == RoundStatus::Open
    }

    pub fn is_terminal(self) -> bool {
        self == RoundStatus::Closed
    }

    /// Whether `transition` may be applied to a round in this state.
    pub fn can_apply(self, transition: RoundTransition) -> bool {
        transition.sources().contains(&self)
    }
}

impl fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a stored status string is not one of the known values.
#[derive(Debug, thiserror::Error)]
#[error("Unknown round status '{0}'")]
pub struct UnknownRoundStatus(pub String);

impl FromStr for RoundStatus {
    type Err = UnknownRoundStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoundStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownRoundStatus(s.to_string()))
    }
}

impl TryFrom<String> for RoundStatus {
    type Error = UnknownRoundStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// An explicit, runner-initiated lifecycle change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundTransition {
    /// `OPEN -> LOCKED`: stop taking orders.
    Lock,
    /// `{OPEN, LOCKED} -> CLOSED`: round is done.
    Close,
}

impl RoundTransition {
    /// States from which this transition is legal.
    pub fn sources(self) -> &'static [RoundStatus] {
        match self {
            RoundTransition::Lock => &[RoundStatus::Open],
            RoundTransition::Close => &[RoundStatus::Open, RoundStatus::Locked],
        }
    }

    /// State the round ends up in.
    pub fn target(self) -> RoundStatus {
        match self {
            RoundTransition::Lock => RoundStatus::Locked,
            RoundTransition::Close => RoundStatus::Closed,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RoundTransition::Lock => "lock",
            RoundTransition::Close => "close",
        }
    }
}

/// Resolve the requested capacity.
///
/// Absent or zero falls back to [`DEFAULT_MAX_ORDERS`]; negative values are
/// rejected.
pub fn resolve_max_orders(requested: Option<i32>) -> Result<i32, CoreError> {
    match requested {
        None | Some(0) => Ok(DEFAULT_MAX_ORDERS),
        Some(n) if n > 0 => Ok(n),
        Some(n) => Err(CoreError::Validation(format!(
            "max_orders must be a positive integer, got {n}"
        ))),
    }
}
