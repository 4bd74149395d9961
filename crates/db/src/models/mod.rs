//! Entity models and DTOs.
//!
//! Row structs derive `FromRow` + `Serialize`; create DTOs carry only the
//! caller-supplied columns.

pub mod contact_message;
pub mod project;
