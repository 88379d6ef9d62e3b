//! Authentication operations.
//!
//! - [`token`] -- opaque credential generation and SHA-256 digesting.
//! - [`session`] -- magic-link redemption and the session lifecycle
//!   (create, validate, revoke), shared by handlers and the extractor.

pub mod session;
pub mod token;
