//! Admin user entity model and DTOs.

use sqlx::FromRow;

use atelier_core::types::{DbId, Timestamp};

/// Full admin user row from the `admin_users` table.
///
/// Accounts are provisioned out of band; this subsystem only ever writes
/// `last_login_at` (on redemption) and `is_active` (administration).
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    pub name: String,
    /// Free-form role name (e.g. `"admin"`).
    pub role: String,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new admin user (provisioning path).
#[derive(Debug)]
pub struct CreateAdminUser {
    pub email: String,
    pub name: String,
    pub role: String,
}
