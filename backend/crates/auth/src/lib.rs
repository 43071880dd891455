//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - Use cases (register, login, user management)
//! - `infra/` - PostgreSQL repository and store-error classification
//! - `presentation/` - HTTP handlers, DTOs, request validation, bearer middleware, router
//!
//! ## Features
//! - Registration with name + email + password
//! - Login with email + password, returning a signed bearer token (24h)
//! - User listing, lookup, update and deletion behind bearer authentication
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never serialized
//! - Stateless HS256 tokens; only the HMAC family is accepted on verification
//! - Login failures never reveal whether the email is registered

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::{AuthConfig, ValidationRules};
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{api_router, api_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
