//! Request handlers.
//!
//! Handlers stay thin: they parse input, read the clock once, and delegate
//! to the operations in [`crate::auth::session`], mapping errors via
//! [`AppError`](crate::error::AppError).

pub mod auth;
