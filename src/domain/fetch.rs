//! Fetch state definitions.

/// Lifecycle of the single in-flight request a screen may have.
///
/// `Loading` holds exactly while a request is outstanding; completion lands
/// on `Success` or `Error`. Screens ignore new operations while loading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// No request has run yet, or the last result was consumed.
    #[default]
    Idle,
    /// A request is outstanding.
    Loading,
    /// The last request completed successfully.
    Success,
    /// The last request failed with the given message.
    Error(String),
}

impl FetchState {
    /// Returns whether a request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the failure message, if the last request failed.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(FetchState::default(), FetchState::Idle);
        assert!(!FetchState::default().is_loading());
    }

    #[test]
    fn test_loading_flag_tracks_variant() {
        assert!(FetchState::Loading.is_loading());
        assert!(!FetchState::Success.is_loading());
        assert!(!FetchState::Error("boom".into()).is_loading());
    }

    #[test]
    fn test_error_message() {
        let state = FetchState::Error("Failed to fetch posts".into());
        assert_eq!(state.error_message(), Some("Failed to fetch posts"));
        assert_eq!(FetchState::Idle.error_message(), None);
    }
}
