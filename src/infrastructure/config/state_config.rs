use serde::{Deserialize, Serialize};

/// Locally persisted session state.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Saved profile name.
    #[serde(default)]
    pub profile_name: Option<String>,
}
