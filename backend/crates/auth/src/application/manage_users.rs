//! User Management Use Cases
//!
//! List, fetch, update and delete users.

use std::sync::Arc;

use crate::application::password::hash_password;
use crate::domain::entity::user::{User, UserChanges};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_id::UserId, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

/// Update input (already validated); at least one field must be set
#[derive(Debug, Default)]
pub struct UpdateUserInput {
    pub name: Option<DisplayName>,
    pub email: Option<Email>,
    pub password: Option<RawPassword>,
}

impl UpdateUserInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

/// User management use case
pub struct ManageUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ManageUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> AuthResult<Vec<User>> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: UserId) -> AuthResult<User> {
        self.repo.find_by_id(id).await
    }

    pub async fn update(&self, id: UserId, input: UpdateUserInput) -> AuthResult<User> {
        if input.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        if let Some(email) = &input.email {
            match self.repo.find_by_email(email).await {
                Ok(other) if other.id != id => return Err(AuthError::EmailExists),
                Ok(_) | Err(AuthError::UserNotFound) => {}
                Err(e) => return Err(e),
            }
        }

        let password = match input.password {
            Some(raw) => Some(hash_password(raw).await?),
            None => None,
        };

        let changes = UserChanges {
            name: input.name,
            email: input.email,
            password,
        };

        let user = self.repo.update(id, &changes).await?;

        tracing::info!(user_id = %user.id, "User updated");

        Ok(user)
    }

    pub async fn delete(&self, id: UserId) -> AuthResult<()> {
        self.repo.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");

        Ok(())
    }
}
