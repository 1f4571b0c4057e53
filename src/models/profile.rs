use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitHub account as returned by `GET /users/{username}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub company: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub html_url: String,
    /// Personal site. GitHub sends an empty string when unset, and the
    /// value frequently has no scheme.
    pub blog: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// The display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.login)
    }

    pub fn website_url(&self) -> Option<String> {
        self.blog.as_deref().and_then(normalize_website)
    }

    /// Avatar fallback letter.
    pub fn initial(&self) -> Option<char> {
        self.login.chars().next().map(|c| c.to_ascii_uppercase())
    }
}

/// Prepends `https://` to a site that does not already start with `http`.
pub fn normalize_website(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("http") {
        Some(raw.to_string())
    } else {
        Some(format!("https://{}", raw))
    }
}
