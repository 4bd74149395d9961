//! Domain types and pure logic for the portfolio API.
//!
//! Nothing in this crate touches the database or HTTP; the `db` and `api`
//! crates build on these types.

pub mod category;
pub mod contact;
pub mod error;
pub mod image;
pub mod project_form;
pub mod types;
