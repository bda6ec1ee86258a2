//! Remote post entity.

use serde::{Deserialize, Serialize};

/// A post fetched from the remote demo API.
///
/// Held in memory for the lifetime of the lab screen only; nothing is
/// written back into this list after create/update calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: u64,
    title: String,
    body: String,
    user_id: u64,
}

impl Post {
    /// Creates a new post record.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>, user_id: u64) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }

    /// Returns the post id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the post title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the post body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the authoring user id.
    #[must_use]
    pub const fn user_id(&self) -> u64 {
        self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_accessors() {
        let post = Post::new(1, "title", "body", 7);
        assert_eq!(post.id(), 1);
        assert_eq!(post.title(), "title");
        assert_eq!(post.body(), "body");
        assert_eq!(post.user_id(), 7);
    }
}
