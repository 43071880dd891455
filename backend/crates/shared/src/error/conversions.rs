//! Error conversions - HTTP rendering for [`AppError`]
//!
//! Every failure leaves the service as the same JSON shape:
//!
//! ```json
//! { "error": "<message>", "details": "<diagnostic>", "errors": { "<field>": "<message>" } }
//! ```
//!
//! `details` and `errors` are omitted when empty.

use std::collections::BTreeMap;

use serde::Serialize;

use super::app_error::AppError;

/// Wire representation of an [`AppError`]
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<&'a str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: &'a BTreeMap<String, String>,
}

impl AppError {
    /// Borrow this error as its wire body
    pub fn body(&self) -> ErrorBody<'_> {
        ErrorBody {
            error: self.message(),
            details: self.details(),
            errors: self.field_errors(),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_server_error() {
            tracing::error!(error = ?self, "Request failed with server error");
        }

        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_omits_empty_fields() {
        let err = AppError::unauthorized("Token requerido");
        let json = serde_json::to_value(err.body()).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Token requerido" }));
    }

    #[test]
    fn test_body_includes_details_and_field_errors() {
        let err = AppError::bad_request("Datos de validación incorrectos")
            .with_field_error("password", "Debe tener al menos 6 caracteres");
        let json = serde_json::to_value(err.body()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "error": "Datos de validación incorrectos",
                "errors": { "password": "Debe tener al menos 6 caracteres" }
            })
        );

        let err = AppError::internal("Error interno del servidor").with_details("pool exploded");
        let json = serde_json::to_value(err.body()).unwrap();
        assert_eq!(json["details"], "pool exploded");
        assert!(json.get("errors").is_none());
    }

    #[cfg(feature = "axum")]
    #[tokio::test]
    async fn test_into_response_status_and_body() {
        use axum::response::IntoResponse;

        let response = AppError::conflict("El email ya está registrado").into_response();
        assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "El email ya está registrado" }));
    }
}
