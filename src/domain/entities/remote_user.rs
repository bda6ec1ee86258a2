//! Remote user entity.

use serde::{Deserialize, Serialize};

/// A user record fetched from the remote demo API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    id: u64,
    name: String,
    email: String,
    phone: String,
}

impl RemoteUser {
    /// Creates a new remote user record.
    #[must_use]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Returns the user id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}
