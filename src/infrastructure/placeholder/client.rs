//! Demo API HTTP client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{CreatePostBody, PostResponse, UpdatePostBody, UserResponse};
use crate::domain::entities::{Post, RemoteUser};
use crate::domain::errors::ApiError;
use crate::domain::ports::{NewPost, PlaceholderApi, PostReceipt, PostUpdate};
use crate::infrastructure::config::ApiConfig;

/// How many fetched records the lab screen shows.
const MAX_LISTED: usize = 5;

/// JSON demo endpoint client.
pub struct PlaceholderClient {
    client: Client,
    base_url: String,
}

impl PlaceholderClient {
    /// Creates a client from the API configuration.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_timeout(&config.base_url, config.timeout_secs)
    }

    /// Creates a client with a custom base URL and the default timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, 30)
    }

    fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn map_transport_error(e: &reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::network("failed to connect to the demo API")
        } else {
            ApiError::network(e.to_string())
        }
    }

    fn check_status(status: StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Status {
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl PlaceholderApi for PlaceholderClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let url = format!("{}/posts", self.base_url);

        debug!("Fetching posts");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Post fetch failed");
            Self::map_transport_error(&e)
        })?;

        Self::check_status(response.status())?;

        let posts: Vec<PostResponse> = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        debug!(count = posts.len(), "Posts fetched");

        Ok(posts
            .into_iter()
            .take(MAX_LISTED)
            .map(Post::from)
            .collect())
    }

    async fn fetch_users(&self) -> Result<Vec<RemoteUser>, ApiError> {
        let url = format!("{}/users", self.base_url);

        debug!("Fetching users");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "User fetch failed");
            Self::map_transport_error(&e)
        })?;

        Self::check_status(response.status())?;

        let users: Vec<UserResponse> = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        debug!(count = users.len(), "Users fetched");

        Ok(users
            .into_iter()
            .take(MAX_LISTED)
            .map(RemoteUser::from)
            .collect())
    }

    async fn create_post(&self, draft: &NewPost) -> Result<PostReceipt, ApiError> {
        let url = format!("{}/posts", self.base_url);

        debug!(title = %draft.title, "Creating post");

        let response = self
            .client
            .post(&url)
            .json(&CreatePostBody::from(draft))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Post create failed");
                Self::map_transport_error(&e)
            })?;

        Self::check_status(response.status())?;

        let created: PostResponse = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        debug!(id = created.id, "Post created");

        Ok(PostReceipt {
            id: created.id,
            title: created.title,
        })
    }

    async fn update_post(&self, update: &PostUpdate) -> Result<PostReceipt, ApiError> {
        let url = format!("{}/posts/{}", self.base_url, update.id);

        debug!(id = update.id, "Updating post");

        let response = self
            .client
            .put(&url)
            .json(&UpdatePostBody::from(update))
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Post update failed");
                Self::map_transport_error(&e)
            })?;

        Self::check_status(response.status())?;

        let updated: PostResponse = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        debug!(id = updated.id, "Post updated");

        Ok(PostReceipt {
            id: updated.id,
            title: updated.title,
        })
    }
}
