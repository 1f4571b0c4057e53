use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter a GitHub username")]
    EmptyUsername,

    #[error("User not found")]
    UserNotFound(String),

    #[error("Failed to fetch user")]
    UserFetch(StatusCode),

    #[error("Failed to fetch repositories")]
    RepositoryFetch(StatusCode),

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input, nothing was requested.
    Validation,
    /// The username does not exist upstream.
    NotFound,
    /// Any other HTTP or transport failure.
    Fetch,
    Other,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyUsername => ErrorKind::Validation,
            Error::UserNotFound(_) => ErrorKind::NotFound,
            Error::UserFetch(_)
            | Error::RepositoryFetch(_)
            | Error::Network(_)
            | Error::Decode(_) => ErrorKind::Fetch,
            Error::Serialization(_) | Error::Config(_) | Error::Io(_) => ErrorKind::Other,
        }
    }

    /// Searches are terminal on failure; nothing is retried automatically.
    pub fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(Error::EmptyUsername.to_string(), "Please enter a GitHub username");
        assert_eq!(
            Error::UserNotFound("ghost".to_string()).to_string(),
            "User not found"
        );
        assert_eq!(
            Error::UserFetch(StatusCode::INTERNAL_SERVER_ERROR).to_string(),
            "Failed to fetch user"
        );
        assert_eq!(
            Error::RepositoryFetch(StatusCode::FORBIDDEN).to_string(),
            "Failed to fetch repositories"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Error::EmptyUsername.kind(), ErrorKind::Validation);
        assert_eq!(
            Error::UserNotFound("ghost".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            Error::RepositoryFetch(StatusCode::FORBIDDEN).kind(),
            ErrorKind::Fetch
        );

        let decode = serde_json::from_str::<u32>("not json").unwrap_err();
        assert_eq!(Error::from(decode).kind(), ErrorKind::Fetch);
        assert_eq!(Error::Config("bad".to_string()).kind(), ErrorKind::Other);
        assert!(!Error::UserFetch(StatusCode::BAD_GATEWAY).is_retryable());
    }
}
