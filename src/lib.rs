pub mod config;
pub mod error;
pub mod github;
pub mod models;
pub mod search;
pub mod view;

pub use config::Config;
pub use error::{Error, ErrorKind, Result};
pub use github::GitHubClient;
pub use search::{SearchOrchestrator, SearchState};
