//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{post::FeedItem, post::Post, session::Session, user::User};
use crate::domain::repository::{PostRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{
    membership::Membership, post_id::PostId, session_id::SessionId, user_id::UserId,
};
use crate::error::{ForumError, ForumResult};

/// PostgreSQL-backed forum repository
#[derive(Clone)]
pub struct PgForumRepository {
    pool: PgPool,
}

impl PgForumRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgForumRepository {
    async fn create_user(&self, user: &User) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                first_name,
                last_name,
                username,
                password_hash,
                membership,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.username)
        .bind(user.password_hash.as_str())
        .bind(user.membership.code())
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> ForumResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                first_name,
                last_name,
                username,
                password_hash,
                membership,
                created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_user_by_username(&self, username: &str) -> ForumResult<Option<User>> {
        // Usernames carry no unique index; LIMIT 1 makes the duplicate case
        // explicit instead of a driver error.
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                first_name,
                last_name,
                username,
                password_hash,
                membership,
                created_at
            FROM users
            WHERE username = $1
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn update_membership(&self, user: &User) -> ForumResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                membership = $2
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.membership.code())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgForumRepository {
    async fn create_post(&self, post: &Post) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                title,
                body,
                created_at,
                author_id
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.created_at)
        .bind(post.author_id.as_ref().map(|id| *id.as_uuid()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_feed(&self) -> ForumResult<Vec<FeedItem>> {
        // LEFT JOIN: a post with a dangling or absent author still renders.
        let rows = sqlx::query_as::<_, FeedRow>(
            r#"
            SELECT
                p.post_id,
                p.title,
                p.body,
                p.created_at,
                p.author_id,
                u.username AS author_username,
                u.first_name AS author_first_name,
                u.last_name AS author_last_name
            FROM posts p
            LEFT JOIN users u ON u.user_id = p.author_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_feed_item()).collect())
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for PgForumRepository {
    async fn create_session(&self, session: &Session) -> ForumResult<()> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                session_id,
                user_id,
                created_at
            ) VALUES ($1, $2, $3)
            "#,
        )
        .bind(session.session_id.as_uuid())
        .bind(session.user_id.as_uuid())
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_session_by_id(&self, session_id: &SessionId) -> ForumResult<Option<Session>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                created_at
            FROM sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_session()))
    }

    async fn delete_session(&self, session_id: &SessionId) -> ForumResult<()> {
        sqlx::query("DELETE FROM sessions WHERE session_id = $1")
            .bind(session_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    first_name: String,
    last_name: String,
    username: String,
    password_hash: String,
    membership: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> ForumResult<User> {
        let password_hash = HashedPassword::from_stored(self.password_hash)
            .map_err(|e| ForumError::Internal(format!("Invalid stored password hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            password_hash,
            membership: Membership::from_code(&self.membership),
            created_at: self.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct FeedRow {
    post_id: Uuid,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    author_id: Option<Uuid>,
    author_username: Option<String>,
    author_first_name: Option<String>,
    author_last_name: Option<String>,
}

impl FeedRow {
    fn into_feed_item(self) -> FeedItem {
        let author_full_name = match (&self.author_first_name, &self.author_last_name) {
            (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
            _ => None,
        };

        FeedItem {
            post: Post {
                post_id: PostId::from_uuid(self.post_id),
                title: self.title,
                body: self.body,
                created_at: self.created_at,
                author_id: self.author_id.map(UserId::from_uuid),
            },
            author_username: self.author_username,
            author_full_name,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> Session {
        Session {
            session_id: SessionId::from_uuid(self.session_id),
            user_id: UserId::from_uuid(self.user_id),
            created_at: self.created_at,
        }
    }
}
