//! Auth Error Types
//!
//! The closed domain taxonomy for users and authentication. Every variant maps
//! to exactly one HTTP status and default message, and converts into the
//! unified `kernel::error::AppError` for rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Usuario no encontrado")]
    UserNotFound,

    /// Uniqueness violation that names neither email nor username
    #[error("El usuario ya existe")]
    UserExists,

    #[error("El email ya está registrado")]
    EmailExists,

    #[error("El nombre de usuario ya está en uso")]
    UsernameExists,

    /// Unknown email or wrong password (indistinguishable on purpose)
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("No autorizado")]
    Unauthorized,

    #[error("Datos de entrada inválidos")]
    InvalidInput,

    #[error("ID inválido")]
    InvalidId,

    #[error("Error de conexión con la base de datos")]
    DatabaseConnection,

    #[error("No se puede completar la operación debido a dependencias")]
    ForeignKeyViolation,

    /// Unclassified store failure; keeps the driver message for diagnostics
    #[error("Error en operación de base de datos")]
    DatabaseOperation(String),

    /// Context-specific error carrying its own status and message
    #[error("{0}")]
    App(AppError),

    /// Anything unrecognized
    #[error("Error interno del servidor")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UserExists | AuthError::EmailExists | AuthError::UsernameExists => {
                ErrorKind::Conflict
            }
            AuthError::InvalidCredentials | AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::InvalidInput | AuthError::InvalidId | AuthError::ForeignKeyViolation => {
                ErrorKind::BadRequest
            }
            AuthError::DatabaseConnection => ErrorKind::ServiceUnavailable,
            AuthError::DatabaseOperation(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
            AuthError::App(e) => e.kind(),
        }
    }

    /// Whether this is an unclassified store failure
    pub fn is_database_operation(&self) -> bool {
        matches!(self, AuthError::DatabaseOperation(_))
    }

    /// Convert to AppError
    ///
    /// Only the unrecognized fallback exposes its raw message as `details`.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::App(e) => {
                let mut app = AppError::new(e.kind(), e.message().to_owned());
                if let Some(details) = e.details() {
                    app = app.with_details(details.to_owned());
                }
                for (field, message) in e.field_errors() {
                    app = app.with_field_error(field.clone(), message.clone());
                }
                app
            }
            AuthError::Internal(msg) => {
                AppError::new(self.kind(), self.to_string()).with_details(msg.clone())
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Convert for rendering; server-class errors keep themselves as source
    ///
    /// The kernel logs server errors once when rendering, source included.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::App(e) => e,
            other if other.status_code().is_server_error() => {
                other.to_app_error().with_source(other)
            }
            other => other.to_app_error(),
        }
    }

    /// Log client-class errors; server errors are logged by `AppError`
    fn log(&self) {
        match self {
            _ if self.status_code().is_server_error() => {}
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::App(err)
    }
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        crate::infra::classifier::classify(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AuthError::UserNotFound, 404),
            (AuthError::UserExists, 409),
            (AuthError::EmailExists, 409),
            (AuthError::UsernameExists, 409),
            (AuthError::InvalidCredentials, 401),
            (AuthError::Unauthorized, 401),
            (AuthError::InvalidInput, 400),
            (AuthError::InvalidId, 400),
            (AuthError::DatabaseConnection, 503),
            (AuthError::ForeignKeyViolation, 400),
            (AuthError::DatabaseOperation("boom".into()), 500),
            (AuthError::Internal("boom".into()), 500),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code().as_u16(), status, "{err:?}");
        }
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(AuthError::EmailExists.to_string(), "El email ya está registrado");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Credenciales inválidas");
        assert_eq!(AuthError::UserNotFound.to_string(), "Usuario no encontrado");
        assert_eq!(AuthError::InvalidId.to_string(), "ID inválido");
    }

    #[test]
    fn test_database_operation_keeps_message_out_of_response() {
        let err = AuthError::DatabaseOperation("syntax error at or near".into());
        assert!(err.is_database_operation());
        assert!(!AuthError::UserNotFound.is_database_operation());

        let app = err.to_app_error();
        assert_eq!(app.message(), "Error en operación de base de datos");
        assert_eq!(app.details(), None);
    }

    #[test]
    fn test_internal_fallback_carries_details() {
        let app = AuthError::Internal("unexpected".into()).to_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.message(), "Error interno del servidor");
        assert_eq!(app.details(), Some("unexpected"));
    }

    #[test]
    fn test_server_errors_carry_domain_source() {
        use std::error::Error as _;

        let app = AuthError::DatabaseOperation("syntax error at or near".into()).into_app_error();
        assert_eq!(app.status_code(), 500);
        assert_eq!(app.details(), None);
        let source = app.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("Error en operación de base de datos"));
        assert!(format!("{app:?}").contains("syntax error at or near"));

        let app = AuthError::DatabaseConnection.into_app_error();
        assert_eq!(app.status_code(), 503);
        assert!(app.source().is_some());

        let app = AuthError::UserNotFound.into_app_error();
        assert_eq!(app.status_code(), 404);
        assert!(app.source().is_none());
    }

    #[test]
    fn test_app_error_passes_through() {
        let err = AuthError::from(
            AppError::bad_request("Datos de validación incorrectos")
                .with_field_error("email", "Debe ser un email válido"),
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let app = err.to_app_error();
        assert_eq!(app.message(), "Datos de validación incorrectos");
        assert_eq!(
            app.field_errors().get("email").map(String::as_str),
            Some("Debe ser un email válido")
        );
    }
}
