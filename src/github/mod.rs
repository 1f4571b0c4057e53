pub mod client;
pub mod rate_limit;
pub mod transport;

pub use client::{GitHubClient, REPOSITORY_PAGE_SIZE};
pub use rate_limit::RateLimitStatus;
pub use transport::{HttpReply, HttpTransport, Transport};
