//! Request Validation
//!
//! `RequestValidator` is built once from `ValidationRules` and shared through
//! handler state. It turns raw DTOs into validated use-case inputs, collecting
//! one message per failing field.

use kernel::error::app_error::AppError;

use crate::application::{
    LoginInput, RegisterInput, UpdateUserInput, config::ValidationRules,
};
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::RawPassword, violation::Violation,
};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{LoginRequest, RegisterRequest, UpdateUserRequest};

/// Top-level message of a validation failure
pub const VALIDATION_FAILED: &str = "Datos de validación incorrectos";

/// Validates request payloads against configured rules
#[derive(Debug, Clone)]
pub struct RequestValidator {
    rules: ValidationRules,
}

impl RequestValidator {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn register(&self, req: RegisterRequest) -> AuthResult<RegisterInput> {
        let mut violations = Violations::default();

        let name = violations.check("name", self.name(req.name));
        let email = violations.check("email", Email::parse(req.email));
        let password = violations.check("password", self.password(req.password));

        violations.into_result()?;

        match (name, email, password) {
            (Some(name), Some(email), Some(password)) => Ok(RegisterInput {
                name,
                email,
                password,
            }),
            _ => Err(AuthError::InvalidInput),
        }
    }

    pub fn login(&self, req: LoginRequest) -> AuthResult<LoginInput> {
        let mut violations = Violations::default();

        let email = violations.check("email", Email::parse(req.email));
        let password = violations.check("password", self.password(req.password));

        violations.into_result()?;

        match (email, password) {
            (Some(email), Some(password)) => Ok(LoginInput { email, password }),
            _ => Err(AuthError::InvalidInput),
        }
    }

    /// Present fields get the same rules as registration
    pub fn update(&self, req: UpdateUserRequest) -> AuthResult<UpdateUserInput> {
        let mut violations = Violations::default();

        let name = req
            .name
            .and_then(|name| violations.check("name", self.name(name)));
        let email = req
            .email
            .and_then(|email| violations.check("email", Email::parse(email)));
        let password = req
            .password
            .and_then(|password| violations.check("password", self.password(password)));

        violations.into_result()?;

        let input = UpdateUserInput {
            name,
            email,
            password,
        };
        if input.is_empty() {
            return Err(AuthError::InvalidInput);
        }

        Ok(input)
    }

    fn name(&self, name: String) -> Result<DisplayName, Violation> {
        DisplayName::parse(name, self.rules.name_min, self.rules.name_max)
    }

    fn password(&self, password: String) -> Result<RawPassword, Violation> {
        RawPassword::new(password, self.rules.password_min)
    }
}

/// Failed fields, in check order
#[derive(Default)]
struct Violations(Vec<(&'static str, Violation)>);

impl Violations {
    fn check<T>(&mut self, field: &'static str, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.0.push((field, violation));
                None
            }
        }
    }

    fn into_result(self) -> AuthResult<()> {
        if self.0.is_empty() {
            return Ok(());
        }

        let err = self
            .0
            .into_iter()
            .fold(AppError::bad_request(VALIDATION_FAILED), |err, (field, v)| {
                err.with_field_error(field, v.to_string())
            });

        Err(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> RequestValidator {
        RequestValidator::new(ValidationRules::default())
    }

    fn field_errors(err: AuthError) -> Vec<(String, String)> {
        err.to_app_error()
            .field_errors()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    #[test]
    fn test_register_valid() {
        let input = validator()
            .register(RegisterRequest {
                name: "John Doe".into(),
                email: "john@example.com".into(),
                password: "password123".into(),
            })
            .unwrap();
        assert_eq!(input.name.as_str(), "John Doe");
        assert_eq!(input.email.as_str(), "john@example.com");
    }

    #[test]
    fn test_register_reports_every_field() {
        let err = validator()
            .register(RegisterRequest {
                name: "Jo".into(),
                email: "not-an-email".into(),
                password: "123".into(),
            })
            .unwrap_err();

        assert_eq!(err.status_code().as_u16(), 400);
        assert_eq!(err.to_app_error().message(), VALIDATION_FAILED);
        assert_eq!(
            field_errors(err),
            vec![
                ("email".to_string(), "Debe ser un email válido".to_string()),
                ("name".to_string(), "Debe tener al menos 3 caracteres".to_string()),
                ("password".to_string(), "Debe tener al menos 6 caracteres".to_string()),
            ]
        );
    }

    #[test]
    fn test_register_missing_fields_are_required() {
        let err = validator().register(RegisterRequest::default()).unwrap_err();
        let errors = field_errors(err);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|(_, msg)| msg == "Este campo es obligatorio"));
    }

    #[test]
    fn test_name_too_long() {
        let err = validator()
            .register(RegisterRequest {
                name: "x".repeat(51),
                email: "john@example.com".into(),
                password: "password123".into(),
            })
            .unwrap_err();
        assert_eq!(
            field_errors(err),
            vec![("name".to_string(), "No puede tener más de 50 caracteres".to_string())]
        );
    }

    #[test]
    fn test_login_validation() {
        assert!(validator()
            .login(LoginRequest {
                email: "john@example.com".into(),
                password: "password123".into(),
            })
            .is_ok());

        let err = validator()
            .login(LoginRequest {
                email: "john".into(),
                password: String::new(),
            })
            .unwrap_err();
        assert_eq!(field_errors(err).len(), 2);
    }

    #[test]
    fn test_update_requires_some_field() {
        let err = validator().update(UpdateUserRequest::default()).unwrap_err();
        assert!(matches!(err, AuthError::InvalidInput));
    }

    #[test]
    fn test_update_validates_present_fields_only() {
        let input = validator()
            .update(UpdateUserRequest {
                name: Some("Jane Doe".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(input.email.is_none());
        assert!(input.password.is_none());

        let err = validator()
            .update(UpdateUserRequest {
                email: Some("bad".into()),
                ..Default::default()
            })
            .unwrap_err();
        assert_eq!(
            field_errors(err),
            vec![("email".to_string(), "Debe ser un email válido".to_string())]
        );
    }
}
