//! Bearer Token Middleware
//!
//! Guards protected routes. A request passes only with
//! `Authorization: Bearer <token>` where the token verifies against the shared
//! secret. The caller identity, when the token carries a usable `user_id`,
//! is attached as [`CurrentUser`]; a token without one still passes, and
//! handlers that need an identity extract `CurrentUser` themselves.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use kernel::error::app_error::AppError;
use platform::token;

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::AuthError;

pub const TOKEN_REQUIRED: &str = "Token requerido";
pub const TOKEN_FORMAT_INVALID: &str = "Formato de token invalido";
pub const SESSION_UNAVAILABLE: &str = "No se pudo iniciar sesión";
pub const TOKEN_INVALID: &str = "Token inválido";

/// Identity of the authenticated caller, stored in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .copied()
            .ok_or(AuthError::Unauthorized)
    }
}

/// Middleware that requires a valid bearer token
pub async fn require_bearer_token(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized(TOKEN_REQUIRED))?;

    let token = header
        .to_str()
        .ok()
        .and_then(parse_bearer)
        .ok_or_else(|| AppError::unauthorized(TOKEN_FORMAT_INVALID))?;

    if !config.has_secret() {
        tracing::error!("Bearer token received but no signing secret is configured");
        return Err(AppError::internal(SESSION_UNAVAILABLE));
    }

    let verified = token::verify(token, &config.jwt_secret).map_err(|e| {
        tracing::warn!(reason = %e, "Rejected bearer token");
        AppError::unauthorized(TOKEN_INVALID)
    })?;

    if let Some(user_id) = verified.user_id() {
        req.extensions_mut()
            .insert(CurrentUser(UserId::from_i64(user_id)));
    }

    Ok(next.run(req).await)
}

/// Exactly two space-separated parts, the first literally `Bearer`
fn parse_bearer(value: &str) -> Option<&str> {
    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bearer() {
        assert_eq!(parse_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(parse_bearer("Bearer "), Some(""));
        assert_eq!(parse_bearer("bearer abc"), None);
        assert_eq!(parse_bearer("Token abc"), None);
        assert_eq!(parse_bearer("Bearer"), None);
        assert_eq!(parse_bearer("Bearer a b"), None);
        assert_eq!(parse_bearer("Bearer  abc"), None);
    }
}
