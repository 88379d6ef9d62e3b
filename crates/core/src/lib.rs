//! Domain logic for the Atelier admin backend.
//!
//! This crate contains no database or HTTP dependencies. Authentication
//! policy decisions are pure functions of pre-loaded data and an explicit
//! timestamp passed in by the caller.

pub mod auth;
pub mod error;
pub mod roles;
pub mod types;
