//! Use-case tests against an in-memory repository.
//!
//! These exercise the full application layer without a database: the three
//! repository traits are implemented over `Mutex<Vec<_>>`, which also makes
//! the inherited gaps (duplicate usernames, authorless posts) easy to pin
//! down as behavior.

use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};

use crate::application::config::ForumConfig;
use crate::application::{
    CurrentIdentityUseCase, FeedUseCase, LogInInput, LogInOutcome, LogInUseCase, LogOutUseCase,
    NewPostInput, NewPostUseCase, SignUpInput, SignUpUseCase, UpgradeOutcome,
    UpgradeStatusUseCase,
};
use crate::domain::entity::{post::FeedItem, post::Post, session::Session, user::User};
use crate::domain::repository::{
    PostRepository, SessionRepository, UserRepository,
};
use crate::domain::value_object::{
    membership::Membership, session_id::SessionId, user_id::UserId,
};
use crate::error::{ForumError, ForumResult};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Default)]
struct MemoryForum {
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<Post>>,
    sessions: Mutex<Vec<Session>>,
}

impl MemoryForum {
    fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl UserRepository for Arc<MemoryForum> {
    async fn create_user(&self, user: &User) -> ForumResult<()> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> ForumResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.user_id == *user_id)
            .cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> ForumResult<Option<User>> {
        // First match wins, like the LIMIT 1 lookup.
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update_membership(&self, user: &User) -> ForumResult<()> {
        let mut users = self.users.lock().unwrap();
        let stored = users
            .iter_mut()
            .find(|u| u.user_id == user.user_id)
            .ok_or_else(|| ForumError::Internal("no such user".to_string()))?;
        stored.membership = user.membership;
        Ok(())
    }
}

impl PostRepository for Arc<MemoryForum> {
    async fn create_post(&self, post: &Post) -> ForumResult<()> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn list_feed(&self) -> ForumResult<Vec<FeedItem>> {
        let users = self.users.lock().unwrap();
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts
            .into_iter()
            .map(|post| {
                let author = post
                    .author_id
                    .as_ref()
                    .and_then(|id| users.iter().find(|u| u.user_id == *id));
                FeedItem {
                    author_username: author.map(|u| u.username.clone()),
                    author_full_name: author.map(|u| u.full_name()),
                    post,
                }
            })
            .collect())
    }
}

impl SessionRepository for Arc<MemoryForum> {
    async fn create_session(&self, session: &Session) -> ForumResult<()> {
        self.sessions.lock().unwrap().push(session.clone());
        Ok(())
    }

    async fn find_session_by_id(&self, session_id: &SessionId) -> ForumResult<Option<Session>> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.session_id == *session_id)
            .cloned())
    }

    async fn delete_session(&self, session_id: &SessionId) -> ForumResult<()> {
        self.sessions
            .lock()
            .unwrap()
            .retain(|s| s.session_id != *session_id);
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn test_config() -> Arc<ForumConfig> {
    Arc::new(ForumConfig {
        session_secret: [9u8; 32],
        upgrade_pass: "open sesame".to_string(),
        cookie_secure: false,
        ..ForumConfig::default()
    })
}

async fn sign_up(repo: &Arc<MemoryForum>, username: &str, password: &str) {
    SignUpUseCase::new(Arc::new(repo.clone()))
        .execute(SignUpInput {
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            username: username.to_string(),
            password: password.to_string(),
        })
        .await
        .unwrap();
}

async fn log_in(
    repo: &Arc<MemoryForum>,
    config: &Arc<ForumConfig>,
    username: &str,
    password: &str,
) -> LogInOutcome {
    LogInUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()), config.clone())
        .execute(LogInInput {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await
        .unwrap()
}

async fn resolve(
    repo: &Arc<MemoryForum>,
    config: &Arc<ForumConfig>,
    token: Option<&str>,
) -> Option<User> {
    CurrentIdentityUseCase::new(Arc::new(repo.clone()), Arc::new(repo.clone()), config.clone())
        .resolve(token)
        .await
        .unwrap()
}

// ============================================================================
// Sign up
// ============================================================================

#[tokio::test]
async fn test_sign_up_stores_hash_not_plaintext() {
    let repo = MemoryForum::new();
    sign_up(&repo, "alice", "pw1").await;

    let users = repo.users.lock().unwrap();
    assert_eq!(users.len(), 1);
    let user = &users[0];
    assert_eq!(user.membership, Membership::Regular);
    assert_ne!(user.password_hash.as_str(), "pw1");
    assert!(user.password_hash.as_str().starts_with("$2"));
}

#[tokio::test]
async fn test_sign_up_accepts_duplicate_usernames() {
    let repo = MemoryForum::new();
    sign_up(&repo, "alice", "pw1").await;
    sign_up(&repo, "alice", "pw2").await;

    // Both records kept, silently.
    assert_eq!(repo.users.lock().unwrap().len(), 2);
}

// ============================================================================
// Log in / identity / log out
// ============================================================================

#[tokio::test]
async fn test_log_in_establishes_resolvable_session() {
    let repo = MemoryForum::new();
    let config = test_config();
    sign_up(&repo, "alice", "pw1").await;

    let LogInOutcome::Authenticated { session_token } =
        log_in(&repo, &config, "alice", "pw1").await
    else {
        panic!("expected authenticated outcome");
    };

    let identity = resolve(&repo, &config, Some(&session_token)).await;
    assert_eq!(identity.unwrap().username, "alice");
}

#[tokio::test]
async fn test_log_in_unknown_user_creates_no_session() {
    let repo = MemoryForum::new();
    let config = test_config();

    let outcome = log_in(&repo, &config, "nobody", "pw1").await;
    assert!(matches!(outcome, LogInOutcome::UnknownUser));
    assert!(repo.sessions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_log_in_bad_password_creates_no_session() {
    let repo = MemoryForum::new();
    let config = test_config();
    sign_up(&repo, "alice", "pw1").await;

    let outcome = log_in(&repo, &config, "alice", "wrong").await;
    assert!(matches!(outcome, LogInOutcome::BadPassword));
    assert!(repo.sessions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_log_out_unresolves_session() {
    let repo = MemoryForum::new();
    let config = test_config();
    sign_up(&repo, "alice", "pw1").await;

    let LogInOutcome::Authenticated { session_token } =
        log_in(&repo, &config, "alice", "pw1").await
    else {
        panic!("expected authenticated outcome");
    };

    LogOutUseCase::new(Arc::new(repo.clone()), config.clone())
        .execute(&session_token)
        .await
        .unwrap();

    assert!(resolve(&repo, &config, Some(&session_token)).await.is_none());
}

#[tokio::test]
async fn test_tampered_token_resolves_to_unauthenticated() {
    let repo = MemoryForum::new();
    let config = test_config();
    sign_up(&repo, "alice", "pw1").await;

    let LogInOutcome::Authenticated { session_token } =
        log_in(&repo, &config, "alice", "pw1").await
    else {
        panic!("expected authenticated outcome");
    };

    let forged = format!("{}x", session_token);
    assert!(resolve(&repo, &config, Some(&forged)).await.is_none());
    assert!(resolve(&repo, &config, None).await.is_none());
}

// ============================================================================
// Feed
// ============================================================================

#[tokio::test]
async fn test_feed_lists_newest_first() {
    let repo = MemoryForum::new();
    let base = Utc::now();

    for (i, title) in ["T1", "T2", "T3"].iter().enumerate() {
        let mut post = Post::new(title.to_string(), "body".to_string(), None);
        post.created_at = base + Duration::seconds(i as i64);
        repo.posts.lock().unwrap().push(post);
    }

    let feed = FeedUseCase::new(Arc::new(repo.clone())).execute().await.unwrap();
    let titles: Vec<_> = feed.iter().map(|i| i.post.title.as_str()).collect();
    assert_eq!(titles, vec!["T3", "T2", "T1"]);
}

#[tokio::test]
async fn test_authorless_post_appears_in_feed() {
    let repo = MemoryForum::new();

    // No signed-in requester: the post is created with no author.
    NewPostUseCase::new(Arc::new(repo.clone()))
        .execute(NewPostInput {
            title: "ghost".to_string(),
            body: "who wrote this".to_string(),
            author_id: None,
        })
        .await
        .unwrap();

    let feed = FeedUseCase::new(Arc::new(repo.clone())).execute().await.unwrap();
    assert_eq!(feed.len(), 1);
    assert!(feed[0].author_username.is_none());
    assert!(feed[0].author_full_name.is_none());
}

// ============================================================================
// Upgrade status
// ============================================================================

#[tokio::test]
async fn test_upgrade_with_exact_secret_promotes_only_that_user() {
    let repo = MemoryForum::new();
    let config = test_config();
    sign_up(&repo, "alice", "pw1").await;
    sign_up(&repo, "bob", "pw2").await;

    let alice = repo.users.lock().unwrap()[0].clone();

    let outcome = UpgradeStatusUseCase::new(Arc::new(repo.clone()), config.clone())
        .execute("open sesame", Some(alice))
        .await
        .unwrap();
    assert!(matches!(outcome, UpgradeOutcome::Promoted));

    let users = repo.users.lock().unwrap();
    assert_eq!(users[0].membership, Membership::Admin);
    assert_eq!(users[1].membership, Membership::Regular);
}

#[tokio::test]
async fn test_upgrade_with_wrong_secret_changes_nothing() {
    let repo = MemoryForum::new();
    let config = test_config();
    sign_up(&repo, "alice", "pw1").await;

    let alice = repo.users.lock().unwrap()[0].clone();

    let outcome = UpgradeStatusUseCase::new(Arc::new(repo.clone()), config.clone())
        .execute("open sesame!", Some(alice))
        .await
        .unwrap();
    assert!(matches!(outcome, UpgradeOutcome::WrongPassword));
    assert_eq!(
        repo.users.lock().unwrap()[0].membership,
        Membership::Regular
    );
}

#[tokio::test]
async fn test_upgrade_with_secret_but_no_identity_errors() {
    let repo = MemoryForum::new();
    let config = test_config();

    let err = UpgradeStatusUseCase::new(Arc::new(repo.clone()), config.clone())
        .execute("open sesame", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ForumError::NoIdentity));
}

// ============================================================================
// End-to-end scenario
// ============================================================================

#[tokio::test]
async fn test_alice_signs_up_logs_in_and_posts() {
    let repo = MemoryForum::new();
    let config = test_config();

    sign_up(&repo, "alice", "pw1").await;

    let LogInOutcome::Authenticated { session_token } =
        log_in(&repo, &config, "alice", "pw1").await
    else {
        panic!("expected authenticated outcome");
    };

    let alice = resolve(&repo, &config, Some(&session_token)).await.unwrap();

    NewPostUseCase::new(Arc::new(repo.clone()))
        .execute(NewPostInput {
            title: "Hello".to_string(),
            body: "World".to_string(),
            author_id: Some(alice.user_id),
        })
        .await
        .unwrap();

    let feed = FeedUseCase::new(Arc::new(repo.clone())).execute().await.unwrap();
    let top = &feed[0];
    assert_eq!(top.post.title, "Hello");
    assert_eq!(top.post.body, "World");
    assert_eq!(top.author_username.as_deref(), Some("alice"));
}
