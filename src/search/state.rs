use serde::Serialize;

use crate::models::{Profile, RepositorySummary};

/// What the search view currently shows. Exactly one of these holds at a time.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        username: String,
    },
    Error {
        message: String,
    },
    Success {
        profile: Profile,
        repositories: Vec<RepositorySummary>,
    },
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            SearchState::Success { profile, .. } => Some(profile),
            _ => None,
        }
    }

    pub fn repositories(&self) -> &[RepositorySummary] {
        match self {
            SearchState::Success { repositories, .. } => repositories.as_slice(),
            _ => &[],
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SearchState::Error { message } => Some(message.as_str()),
            _ => None,
        }
    }
}
