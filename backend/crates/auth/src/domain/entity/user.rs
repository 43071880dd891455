//! User Entity
//!
//! A persisted user plus the shapes used to create and change one.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId, user_password::UserPassword,
};

/// User entity
///
/// `id`, `created_at` and `updated_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: DisplayName,
    /// Unique, case-sensitive as stored
    pub email: Email,
    /// Argon2id hash, never the submitted plaintext
    pub password: UserPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: DisplayName,
    pub email: Email,
    pub password: UserPassword,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<DisplayName>,
    pub email: Option<Email>,
    pub password: Option<UserPassword>,
}
