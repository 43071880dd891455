//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::password::hash_password;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

/// Register input (already validated)
#[derive(Debug)]
pub struct RegisterInput {
    pub name: DisplayName,
    pub email: Email,
    pub password: RawPassword,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<User> {
        // A missing user is the expected case; anything else aborts
        match self.repo.find_by_email(&input.email).await {
            Ok(_) => return Err(AuthError::EmailExists),
            Err(AuthError::UserNotFound) => {}
            Err(e) => return Err(e),
        }

        let password = hash_password(input.password).await?;

        let user = self
            .repo
            .create(&NewUser {
                name: input.name,
                email: input.email,
                password,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(user)
    }
}
