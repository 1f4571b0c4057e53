use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_DESCRIPTION: &str = "No description available";

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl RepositorySummary {
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_repository_list() {
        let body = r#"[
            {
                "id": 1296269,
                "name": "Hello-World",
                "full_name": "octocat/Hello-World",
                "description": "My first repository on GitHub!",
                "html_url": "https://github.com/octocat/Hello-World",
                "fork": false,
                "stargazers_count": 2500,
                "forks_count": 2100,
                "language": null,
                "updated_at": "2024-05-01T10:00:00Z"
            },
            {
                "id": 18221276,
                "name": "git-consortium",
                "description": null,
                "html_url": "https://github.com/octocat/git-consortium",
                "stargazers_count": 30,
                "forks_count": 40,
                "language": "Ruby",
                "updated_at": "2023-12-01T08:30:00Z"
            }
        ]"#;

        let repos: Vec<RepositorySummary> = serde_json::from_str(body).unwrap();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].stargazers_count, 2500);
        assert_eq!(repos[0].language, None);
        assert_eq!(repos[0].description_or_default(), "My first repository on GitHub!");
        assert_eq!(repos[1].description_or_default(), NO_DESCRIPTION);
        assert_eq!(repos[1].language.as_deref(), Some("Ruby"));
    }
}
