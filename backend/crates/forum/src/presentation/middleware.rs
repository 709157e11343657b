//! Identity Middleware
//!
//! Resolves the session cookie to a user before handler dispatch and stores
//! the result in request extensions. Handlers read `CurrentUser` instead of
//! touching the cookie themselves.

use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::CurrentIdentityUseCase;
use crate::domain::entity::user::User;
use crate::domain::repository::{PostRepository, SessionRepository, UserRepository};
use crate::presentation::handlers::ForumAppState;

/// Current identity stored in request extensions.
///
/// `None` means the request is unauthenticated; every route still runs.
#[derive(Clone)]
pub struct CurrentUser(pub Option<User>);

/// Middleware that resolves the session cookie to a user.
///
/// Bad signatures, missing sessions and missing users all resolve to
/// `CurrentUser(None)`; only a storage fault aborts the request.
pub async fn resolve_identity<R>(
    state: ForumAppState<R>,
    mut req: Request<Body>,
    next: Next,
) -> Response
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let use_case =
        CurrentIdentityUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let identity = match use_case.resolve(token.as_deref()).await {
        Ok(identity) => identity,
        Err(e) => return e.into_response(),
    };

    req.extensions_mut().insert(CurrentUser(identity));

    next.run(req).await
}
