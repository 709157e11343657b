//! Forum Router

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::ForumConfig;
use crate::domain::repository::{PostRepository, SessionRepository, UserRepository};
use crate::infra::postgres::PgForumRepository;
use crate::presentation::handlers::{self, ForumAppState};
use crate::presentation::middleware::resolve_identity;

/// Create the forum router with the PostgreSQL repository
pub fn forum_router(repo: PgForumRepository, config: ForumConfig) -> Router {
    forum_router_generic(repo, config)
}

/// Create a forum router for any repository implementation
pub fn forum_router_generic<R>(repo: R, config: ForumConfig) -> Router
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let state = ForumAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let identity_state = state.clone();

    Router::new()
        .route("/", get(handlers::index::<R>))
        .route("/sign-up", get(handlers::sign_up_form))
        .route("/sign-up", post(handlers::sign_up_submit::<R>))
        .route("/log-in", get(handlers::log_in_form))
        .route("/log-in", post(handlers::log_in_submit::<R>))
        .route("/log-out", get(handlers::log_out::<R>))
        .route("/new-post", post(handlers::new_post_submit::<R>))
        .route("/upgrade-status", get(handlers::upgrade_form))
        .route("/upgrade-status", post(handlers::upgrade_submit::<R>))
        .layer(axum::middleware::from_fn(
            move |req: Request<Body>, next: Next| {
                let state = identity_state.clone();
                async move { resolve_identity(state, req, next).await }
            },
        ))
        .with_state(state)
}
