//! Feed Use Case
//!
//! Fetches all posts newest-first with their authors resolved.

use std::sync::Arc;

use crate::domain::entity::post::FeedItem;
use crate::domain::repository::PostRepository;
use crate::error::ForumResult;

/// Feed use case
pub struct FeedUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> FeedUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self) -> ForumResult<Vec<FeedItem>> {
        self.post_repo.list_feed().await
    }
}
