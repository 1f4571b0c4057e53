use tokio::sync::mpsc::UnboundedSender;

use crate::error::{Error, Result};
use crate::github::{GitHubClient, REPOSITORY_PAGE_SIZE};
use crate::models::{Profile, RepositorySummary};
use crate::search::notify::Notification;
use crate::search::ranking::top_by_stars;
use crate::search::state::SearchState;

/// Owns the search state and drives the profile and repository fetches.
///
/// All transitions go through `&mut self`, so at most one search is ever
/// in flight. A search runs in two phases: [`begin`](Self::begin) validates
/// the input and enters `Loading`, [`complete`](Self::complete) performs the
/// requests and commits either `Success` or `Error`. Front ends that need to
/// draw the loading state call the two phases separately; everything else
/// can use [`search`](Self::search).
pub struct SearchOrchestrator {
    github: GitHubClient,
    state: SearchState,
    notifications: UnboundedSender<Notification>,
}

impl SearchOrchestrator {
    pub fn new(github: GitHubClient, notifications: UnboundedSender<Notification>) -> Self {
        Self {
            github,
            state: SearchState::Idle,
            notifications,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub async fn search(&mut self, input: &str) -> &SearchState {
        if let Some(username) = self.begin(input) {
            self.complete(&username).await;
        }
        &self.state
    }

    /// Validates `input` and enters `Loading`, discarding whatever was shown before.
    ///
    /// Returns the trimmed username to pass to `complete`, or `None` when the
    /// input is blank or a search is already running. Neither case touches the state.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        let username = input.trim();

        if username.is_empty() {
            tracing::debug!("Rejected blank username");
            self.notify(Notification::error(Error::EmptyUsername.to_string()));
            return None;
        }

        if self.state.is_loading() {
            tracing::warn!("Search already in progress, ignoring: {}", username);
            return None;
        }

        self.state = SearchState::Loading {
            username: username.to_string(),
        };
        Some(username.to_string())
    }

    pub async fn complete(&mut self, username: &str) {
        match self.fetch(username).await {
            Ok((profile, repositories)) => {
                let message = format!(
                    "Found {} with {} repositories",
                    profile.display_name(),
                    profile.public_repos
                );
                tracing::info!(
                    "Loaded {} ({} of {} repositories shown)",
                    profile.login,
                    repositories.len(),
                    profile.public_repos
                );

                self.state = SearchState::Success {
                    profile,
                    repositories,
                };
                self.notify(Notification::success(message));
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!("Search for {} failed ({:?}): {}", username, e.kind(), message);

                // A profile fetched before a failed repository request is dropped here.
                self.state = SearchState::Error {
                    message: message.clone(),
                };
                self.notify(Notification::error(message));
            }
        }
    }

    /// Abandons a search whose `complete` future was dropped. Returns whether
    /// anything was cancelled.
    pub fn cancel(&mut self) -> bool {
        if let SearchState::Loading { username } = &self.state {
            tracing::info!("Cancelled search for {}", username);
            self.state = SearchState::Idle;
            return true;
        }
        false
    }

    async fn fetch(&self, username: &str) -> Result<(Profile, Vec<RepositorySummary>)> {
        let profile = self.github.get_user(username).await?;
        let repos = self
            .github
            .get_user_repos(username, REPOSITORY_PAGE_SIZE)
            .await?;

        Ok((profile, top_by_stars(repos)))
    }

    fn notify(&self, notification: Notification) {
        if self.notifications.send(notification).is_err() {
            tracing::debug!("Notification receiver dropped");
        }
    }
}
