use serde::{Deserialize, Serialize};

use crate::domain::entities::{Post, RemoteUser};
use crate::domain::ports::{NewPost, PostUpdate};

/// Demo API post response structure.
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    /// Post ID.
    pub id: u64,
    /// Post title.
    pub title: String,
    /// Post body.
    #[serde(default)]
    pub body: String,
    /// Authoring user ID.
    #[serde(rename = "userId", default)]
    pub user_id: u64,
}

impl From<PostResponse> for Post {
    fn from(dto: PostResponse) -> Self {
        Self::new(dto.id, dto.title, dto.body, dto.user_id)
    }
}

/// Demo API user response structure.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
}

impl From<UserResponse> for RemoteUser {
    fn from(dto: UserResponse) -> Self {
        Self::new(dto.id, dto.name, dto.email, dto.phone)
    }
}

/// Body sent when creating a post.
#[derive(Debug, Serialize)]
pub struct CreatePostBody<'a> {
    /// Post title.
    pub title: &'a str,
    /// Post body.
    pub body: &'a str,
    /// Authoring user ID.
    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl<'a> From<&'a NewPost> for CreatePostBody<'a> {
    fn from(draft: &'a NewPost) -> Self {
        Self {
            title: &draft.title,
            body: &draft.body,
            user_id: draft.user_id,
        }
    }
}

/// Body sent when replacing a post.
#[derive(Debug, Serialize)]
pub struct UpdatePostBody<'a> {
    /// Post ID being replaced.
    pub id: u64,
    /// New title.
    pub title: &'a str,
    /// New body.
    pub body: &'a str,
    /// Authoring user ID.
    #[serde(rename = "userId")]
    pub user_id: u64,
}

impl<'a> From<&'a PostUpdate> for UpdatePostBody<'a> {
    fn from(update: &'a PostUpdate) -> Self {
        Self {
            id: update.id,
            title: &update.title,
            body: &update.body,
            user_id: update.user_id,
        }
    }
}
