//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Expiry-relevant timestamps are
//! bound from caller-supplied values rather than `NOW()` so every validity
//! decision in a request shares one clock reading.

pub mod admin_user_repo;
pub mod magic_link_repo;
pub mod session_repo;

pub use admin_user_repo::AdminUserRepo;
pub use magic_link_repo::MagicLinkRepo;
pub use session_repo::SessionRepo;
