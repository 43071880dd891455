//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//!
//! Implementations return domain errors only: raw store failures go through
//! `infra::classifier` before they leave the repository.

use crate::domain::entity::user::{NewUser, User, UserChanges};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// All users, ordered by ID
    async fn find_all(&self) -> AuthResult<Vec<User>>;

    /// Find user by ID (`UserNotFound` if missing)
    async fn find_by_id(&self, id: UserId) -> AuthResult<User>;

    /// Find user by exact email (`UserNotFound` if missing)
    async fn find_by_email(&self, email: &Email) -> AuthResult<User>;

    /// Insert a user and return the stored record
    async fn create(&self, user: &NewUser) -> AuthResult<User>;

    /// Apply changes and return the stored record (`UserNotFound` if missing)
    async fn update(&self, id: UserId, changes: &UserChanges) -> AuthResult<User>;

    /// Delete a user (`UserNotFound` if no row was removed)
    async fn delete(&self, id: UserId) -> AuthResult<()>;
}
