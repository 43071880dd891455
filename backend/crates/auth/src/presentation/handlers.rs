//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use kernel::error::app_error::AppError;

use crate::application::config::AuthConfig;
use crate::application::{LoginUseCase, ManageUsersUseCase, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UpdateUserRequest,
    UserResponse,
};
use crate::presentation::middleware::CurrentUser;
use crate::presentation::validation::RequestValidator;

/// Shared state for auth and user handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub validator: Arc<RequestValidator>,
}

/// Unwrap a JSON body, answering 400 with `message` when it cannot be read
fn json_body<T>(payload: Result<Json<T>, JsonRejection>, message: &'static str) -> AuthResult<T> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Unreadable JSON body");
        AuthError::App(AppError::bad_request(message))
    })
}

fn user_id_from_path(raw: &str) -> AuthResult<UserId> {
    raw.parse().map_err(|_| AuthError::InvalidId)
}

// ============================================================================
// Auth
// ============================================================================

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<MessageResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(payload, "Datos inválidos proporcionados")?;
    let input = state.validator.register(req)?;

    RegisterUseCase::new(state.repo.clone()).execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Usuario creado exitosamente",
        }),
    ))
}

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let req = json_body(payload, "Datos inválidos")?;
    let input = state.validator.login(req)?;

    let output = LoginUseCase::new(state.repo.clone(), state.config.clone())
        .execute(input)
        .await?;

    Ok(Json(LoginResponse {
        message: "Inicio de sesión exitoso",
        token: output.token,
    }))
}

// ============================================================================
// Users (bearer token required)
// ============================================================================

/// GET /users
pub async fn list_users<R>(
    State(state): State<AuthAppState<R>>,
) -> AuthResult<Json<Vec<UserResponse>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let users = ManageUsersUseCase::new(state.repo.clone()).list().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/me
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user_id): CurrentUser,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let user = ManageUsersUseCase::new(state.repo.clone())
        .get(user_id)
        .await?;

    Ok(Json(user.into()))
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let id = user_id_from_path(&id)?;
    let user = ManageUsersUseCase::new(state.repo.clone()).get(id).await?;

    Ok(Json(user.into()))
}

/// PUT /users/{id}
pub async fn update_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> AuthResult<Json<UserResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let id = user_id_from_path(&id)?;
    let req = json_body(payload, "Datos inválidos")?;
    let input = state.validator.update(req)?;

    let user = ManageUsersUseCase::new(state.repo.clone())
        .update(id, input)
        .await?;

    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<String>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let id = user_id_from_path(&id)?;
    ManageUsersUseCase::new(state.repo.clone()).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
