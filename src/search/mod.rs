pub mod notify;
pub mod orchestrator;
pub mod ranking;
pub mod state;

pub use notify::{notification_channel, Notification, NotificationLevel};
pub use orchestrator::SearchOrchestrator;
pub use ranking::{top_by_stars, TOP_REPOSITORY_COUNT};
pub use state::SearchState;
