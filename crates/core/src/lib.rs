//! Domain core for group order rounds.
//!
//! Holds everything that can be decided without touching storage: the round
//! lifecycle state machine, input validation, and the admission decision.
//! The `haul-db` crate runs these inside its transactions.

pub mod admission;
pub mod error;
pub mod round;
pub mod types;
pub mod validation;
