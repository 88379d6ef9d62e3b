//! Authentication middleware extractors.
//!
//! - [`auth::AuthAdmin`] -- Validates the Bearer session token against the
//!   store and extracts the authenticated admin.

pub mod auth;
