//! Presentation Layer
//!
//! HTTP handlers, DTOs, request validation, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod validation;

pub use handlers::AuthAppState;
pub use middleware::{CurrentUser, require_bearer_token};
pub use router::{api_router, api_router_generic};
pub use validation::RequestValidator;
