//! Well-known role name constants.
//!
//! Roles are free-form strings on the `admin_users.role` column; these
//! constants cover the values provisioning currently writes.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SUPPORT: &str = "support";
