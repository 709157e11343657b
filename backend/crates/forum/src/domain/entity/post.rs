//! Post Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{post_id::PostId, user_id::UserId};

/// Post entity
///
/// Immutable once created; posts are never edited or deleted.
///
/// `author_id` is optional: the new-post operation does not require a
/// signed-in user, so a post created without one carries no author. This
/// mirrors the legacy behavior and is documented in DESIGN.md rather than
/// fixed here.
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub title: String,
    pub body: String,
    /// Creation timestamp; feed order is defined solely by this value
    pub created_at: DateTime<Utc>,
    pub author_id: Option<UserId>,
}

impl Post {
    /// Create a new post with the current timestamp
    pub fn new(title: String, body: String, author_id: Option<UserId>) -> Self {
        Self {
            post_id: PostId::new(),
            title,
            body,
            created_at: Utc::now(),
            author_id,
        }
    }
}

/// A feed row: a post joined to whatever is known about its author.
///
/// A post whose author cannot be resolved still renders; the author fields
/// are simply absent (tolerated failure mode, not a detected error).
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub post: Post,
    pub author_username: Option<String>,
    pub author_full_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_without_author() {
        let post = Post::new("Hello".to_string(), "World".to_string(), None);
        assert!(post.author_id.is_none());
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn test_new_post_with_author() {
        let author = UserId::new();
        let post = Post::new("Hello".to_string(), "World".to_string(), Some(author));
        assert_eq!(post.author_id, Some(author));
    }
}
