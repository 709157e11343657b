//! HTTP Handlers

use axum::Form;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::sync::Arc;

use crate::application::config::ForumConfig;
use crate::application::{
    FeedUseCase, LogInInput, LogInOutcome, LogInUseCase, LogOutUseCase, NewPostInput,
    NewPostUseCase, SignUpInput, SignUpUseCase, UpgradeOutcome, UpgradeStatusUseCase,
};
use crate::domain::repository::{PostRepository, SessionRepository, UserRepository};
use crate::error::ForumResult;
use crate::presentation::forms::{LogInForm, NewPostForm, SignUpForm, UpgradeForm};
use crate::presentation::middleware::CurrentUser;
use crate::presentation::views;

/// Shared state for forum handlers
#[derive(Clone)]
pub struct ForumAppState<R>
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<ForumConfig>,
}

// ============================================================================
// Feed
// ============================================================================

/// GET /
pub async fn index<R>(
    State(state): State<ForumAppState<R>>,
    axum::Extension(CurrentUser(current)): axum::Extension<CurrentUser>,
) -> ForumResult<Html<String>>
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let items = FeedUseCase::new(state.repo.clone()).execute().await?;

    Ok(views::feed_page(current.as_ref(), &items, &[]))
}

// ============================================================================
// Sign Up
// ============================================================================

/// GET /sign-up
pub async fn sign_up_form() -> Html<String> {
    views::sign_up_page(&SignUpForm::default(), &[])
}

/// POST /sign-up
pub async fn sign_up_submit<R>(
    State(state): State<ForumAppState<R>>,
    Form(form): Form<SignUpForm>,
) -> ForumResult<Response>
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let valid = match form.validate() {
        Ok(valid) => valid,
        // Redisplay with inline errors at 200, nothing persisted.
        Err(errors) => return Ok(views::sign_up_page(&form, &errors).into_response()),
    };

    let use_case = SignUpUseCase::new(state.repo.clone());

    use_case
        .execute(SignUpInput {
            first_name: valid.first_name,
            last_name: valid.last_name,
            username: valid.username,
            password: valid.password,
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}

// ============================================================================
// Log In / Log Out
// ============================================================================

/// GET /log-in
pub async fn log_in_form() -> Html<String> {
    views::log_in_page()
}

/// POST /log-in
pub async fn log_in_submit<R>(
    State(state): State<ForumAppState<R>>,
    Form(form): Form<LogInForm>,
) -> ForumResult<Response>
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        LogInUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let outcome = use_case
        .execute(LogInInput {
            username: form.username,
            password: form.password,
        })
        .await?;

    match outcome {
        LogInOutcome::Authenticated { session_token } => {
            let cookie = state.config.cookie().build_set_cookie(&session_token);
            Ok((
                [(header::SET_COOKIE, cookie)],
                Redirect::to("/"),
            )
                .into_response())
        }
        // Soft failure: back to the feed, unauthenticated, no reason shown.
        LogInOutcome::UnknownUser | LogInOutcome::BadPassword => {
            Ok(Redirect::to("/").into_response())
        }
    }
}

/// GET /log-out
pub async fn log_out<R>(
    State(state): State<ForumAppState<R>>,
    headers: HeaderMap,
) -> ForumResult<impl IntoResponse>
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) =
        platform::cookie::extract_cookie(&headers, &state.config.session_cookie_name)
    {
        let use_case = LogOutUseCase::new(state.repo.clone(), state.config.clone());
        // Storage failures propagate to the generic failure page.
        use_case.execute(&token).await?;
    }

    let cookie = state.config.cookie().build_delete_cookie();

    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")))
}

// ============================================================================
// New Post
// ============================================================================

/// POST /new-post
pub async fn new_post_submit<R>(
    State(state): State<ForumAppState<R>>,
    axum::Extension(CurrentUser(current)): axum::Extension<CurrentUser>,
    Form(form): Form<NewPostForm>,
) -> ForumResult<Response>
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            // Redisplay the feed with the errors inline.
            let items = FeedUseCase::new(state.repo.clone()).execute().await?;
            return Ok(views::feed_page(current.as_ref(), &items, &errors).into_response());
        }
    };

    let use_case = NewPostUseCase::new(state.repo.clone());

    // No signed-in check: an anonymous request yields an authorless post.
    use_case
        .execute(NewPostInput {
            title: valid.title,
            body: valid.body,
            author_id: current.map(|user| user.user_id),
        })
        .await?;

    Ok(Redirect::to("/").into_response())
}

// ============================================================================
// Upgrade Status
// ============================================================================

/// GET /upgrade-status
pub async fn upgrade_form(
    axum::Extension(CurrentUser(current)): axum::Extension<CurrentUser>,
) -> Html<String> {
    views::upgrade_page(current.as_ref(), "")
}

/// POST /upgrade-status
pub async fn upgrade_submit<R>(
    State(state): State<ForumAppState<R>>,
    axum::Extension(CurrentUser(current)): axum::Extension<CurrentUser>,
    Form(form): Form<UpgradeForm>,
) -> ForumResult<Html<String>>
where
    R: UserRepository + PostRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpgradeStatusUseCase::new(state.repo.clone(), state.config.clone());

    // A matching secret with no identity errors out as a 500 here.
    let outcome = use_case.execute(&form.admin_pwd, current.clone()).await?;

    let message = match outcome {
        UpgradeOutcome::Promoted => "congratulations! you have been promoted to admin!",
        UpgradeOutcome::WrongPassword => "wrong password",
    };

    Ok(views::upgrade_page(current.as_ref(), message))
}
