use std::sync::Arc;

use reqwest::StatusCode;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::github::transport::{HttpReply, HttpTransport, Transport};
use crate::models::{Profile, RepositorySummary};

/// Repositories requested per search, most recently updated first.
pub const REPOSITORY_PAGE_SIZE: u32 = 6;

pub struct GitHubClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(
            HttpTransport::new()?,
            config.api_base_url.clone(),
        ))
    }

    pub fn with_transport(transport: impl Transport + 'static, base_url: Url) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url,
        }
    }

    pub async fn get_user(&self, username: &str) -> Result<Profile> {
        let url = self.endpoint(&["users", username])?;
        tracing::info!("Fetching user: {}", username);

        let reply = self.transport.get(&url).await?;
        log_rate_limit(&reply);

        if reply.status == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        if !reply.status.is_success() {
            tracing::warn!("Failed to fetch user {}: {}", username, reply.status);
            return Err(Error::UserFetch(reply.status));
        }

        Ok(serde_json::from_str(&reply.body)?)
    }

    pub async fn get_user_repos(
        &self,
        username: &str,
        per_page: u32,
    ) -> Result<Vec<RepositorySummary>> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &per_page.to_string());
        tracing::info!("Fetching repositories for: {}", username);

        let reply = self.transport.get(&url).await?;
        log_rate_limit(&reply);

        if !reply.status.is_success() {
            tracing::warn!(
                "Failed to fetch repositories for {}: {}",
                username,
                reply.status
            );
            return Err(Error::RepositoryFetch(reply.status));
        }

        Ok(serde_json::from_str(&reply.body)?)
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

fn log_rate_limit(reply: &HttpReply) {
    if let Some(limit) = reply.rate_limit.filter(|l| l.is_exhausted()) {
        match limit.reset_at {
            Some(reset_at) => tracing::warn!("GitHub rate limit exhausted until {}", reset_at),
            None => tracing::warn!("GitHub rate limit exhausted"),
        }
    }
}
