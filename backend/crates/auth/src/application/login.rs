//! Login Use Case
//!
//! Verifies credentials and issues a signed bearer token.

use std::sync::Arc;

use kernel::error::app_error::ResultExt;
use kernel::error::kind::ErrorKind;
use platform::token::{self, Claims};

use crate::application::config::AuthConfig;
use crate::application::password::verify_password;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Login input (already validated)
#[derive(Debug)]
pub struct LoginInput {
    pub email: Email,
    pub password: RawPassword,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // Unknown email and wrong password must look the same to the caller
        let user = match self.repo.find_by_email(&input.email).await {
            Ok(user) => user,
            Err(AuthError::UserNotFound) => return Err(AuthError::InvalidCredentials),
            Err(e) => return Err(e),
        };

        if !verify_password(user.password.clone(), input.password).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = Claims::issue_now(user.id.value());
        let token = token::sign(&claims, &self.config.jwt_secret)
            .map_app_err(ErrorKind::InternalServerError, "Error al generar token")?;

        tracing::info!(user_id = %user.id, "User signed in");

        Ok(LoginOutput {
            user_id: user.id,
            token,
        })
    }
}
