//! Password work on the blocking pool
//!
//! Argon2id hashing and verification run via `spawn_blocking`, never on the
//! async executor.

use kernel::error::app_error::AppError;
use tokio::task::{self, JoinError};

use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{AuthError, AuthResult};

/// Hash a password; the plaintext is dropped (and zeroized) on the worker
pub async fn hash_password(raw: RawPassword) -> AuthResult<UserPassword> {
    task::spawn_blocking(move || UserPassword::from_raw(&raw))
        .await
        .map_err(worker_failed)?
        .map_err(AuthError::from)
}

/// Compare a password against a stored hash in constant time
pub async fn verify_password(hash: UserPassword, raw: RawPassword) -> AuthResult<bool> {
    task::spawn_blocking(move || hash.verify(&raw))
        .await
        .map_err(worker_failed)
}

// The join error stays a source only; it never reaches the response body.
fn worker_failed(e: JoinError) -> AuthError {
    AuthError::App(AppError::internal("Error al procesar la contraseña").with_source(e))
}
