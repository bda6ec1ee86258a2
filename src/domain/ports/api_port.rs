//! Remote demo API port definition.

use async_trait::async_trait;

use crate::domain::entities::{Post, RemoteUser};
use crate::domain::errors::ApiError;

/// Payload for the create operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub body: String,
    /// Authoring user id.
    pub user_id: u64,
}

/// Payload for the update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    /// Id of the post being replaced.
    pub id: u64,
    /// New title.
    pub title: String,
    /// New body.
    pub body: String,
    /// Authoring user id.
    pub user_id: u64,
}

/// What the demo API echoes back for a write.
///
/// Displayed once in a popup and then discarded; the in-memory post list is
/// deliberately not reconciled with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReceipt {
    /// Id assigned (or confirmed) by the server.
    pub id: u64,
    /// Title as stored by the server.
    pub title: String,
}

/// Port for the public JSON demo endpoint.
#[async_trait]
pub trait PlaceholderApi: Send + Sync {
    /// Fetches the post list.
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// Fetches the user list.
    async fn fetch_users(&self) -> Result<Vec<RemoteUser>, ApiError>;

    /// Creates a post from the given draft.
    async fn create_post(&self, draft: &NewPost) -> Result<PostReceipt, ApiError>;

    /// Replaces an existing post.
    async fn update_post(&self, update: &PostUpdate) -> Result<PostReceipt, ApiError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    /// Mock API for testing screens and use cases.
    pub struct MockPlaceholderApi {
        should_succeed: AtomicBool,
        response_delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl MockPlaceholderApi {
        /// Creates a mock with the given outcome.
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: AtomicBool::new(should_succeed),
                response_delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        /// Delays every response, to observe in-flight state.
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.response_delay = Some(delay);
            self
        }

        /// Number of operations served so far.
        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn settle(&self) -> Result<(), ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.response_delay {
                tokio::time::sleep(delay).await;
            }
            if self.should_succeed.load(Ordering::SeqCst) {
                Ok(())
            } else {
                Err(ApiError::network("mock network failure"))
            }
        }
    }

    #[async_trait]
    impl PlaceholderApi for MockPlaceholderApi {
        async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
            self.settle().await?;
            Ok(vec![
                Post::new(1, "first post", "body one", 1),
                Post::new(2, "second post", "body two", 1),
            ])
        }

        async fn fetch_users(&self) -> Result<Vec<RemoteUser>, ApiError> {
            self.settle().await?;
            Ok(vec![RemoteUser::new(
                1,
                "Leanne Graham",
                "leanne@example.org",
                "1-770-736-8031",
            )])
        }

        async fn create_post(&self, draft: &NewPost) -> Result<PostReceipt, ApiError> {
            self.settle().await?;
            Ok(PostReceipt {
                id: 101,
                title: draft.title.clone(),
            })
        }

        async fn update_post(&self, update: &PostUpdate) -> Result<PostReceipt, ApiError> {
            self.settle().await?;
            Ok(PostReceipt {
                id: update.id,
                title: update.title.clone(),
            })
        }
    }
}
