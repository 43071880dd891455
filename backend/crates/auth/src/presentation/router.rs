//! Auth Router
//!
//! Exposes `/auth/*` (public) and `/users*` (bearer token required). The
//! binary mounts the result under its API base path.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_bearer_token;
use crate::presentation::validation::RequestValidator;

/// Create the router with the PostgreSQL repository
pub fn api_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    api_router_generic(repo, config)
}

/// Create a generic router for any repository implementation
pub fn api_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let config = Arc::new(config);
    let state = AuthAppState {
        repo: Arc::new(repo),
        validator: Arc::new(RequestValidator::new(config.rules)),
        config: config.clone(),
    };

    let public = Router::new()
        .route("/auth/register", post(handlers::register::<R>))
        .route("/auth/login", post(handlers::login::<R>));

    let protected = Router::new()
        .route("/users", get(handlers::list_users::<R>))
        .route("/users/", get(handlers::list_users::<R>))
        .route("/users/me", get(handlers::current_user::<R>))
        .route(
            "/users/{id}",
            get(handlers::get_user::<R>)
                .put(handlers::update_user::<R>)
                .delete(handlers::delete_user::<R>),
        )
        .route_layer(middleware::from_fn_with_state(config, require_bearer_token));

    public.merge(protected).with_state(state)
}
