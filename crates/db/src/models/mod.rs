//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//!
//! Entity structs are not serialized to API responses directly; the `api`
//! crate builds its own response types from them.

pub mod admin_user;
pub mod magic_link;
pub mod session;
