//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO whose fields are all optional, validated
//!   into a `New*` value before insert

pub mod order;
pub mod round;
