//! New Post Use Case
//!
//! Creates a post with the current timestamp and the current identity as
//! author. There is no check that a requester is signed in: an
//! unauthenticated request yields a post with no author. Preserved gap,
//! see DESIGN.md.

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::ForumResult;

/// New post input
pub struct NewPostInput {
    pub title: String,
    pub body: String,
    /// Current identity, absent when the requester is not signed in
    pub author_id: Option<UserId>,
}

/// New post use case
pub struct NewPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> NewPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: NewPostInput) -> ForumResult<()> {
        let post = Post::new(input.title, input.body, input.author_id);

        self.post_repo.create_post(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            author = ?post.author_id,
            "Post created"
        );

        Ok(())
    }
}
