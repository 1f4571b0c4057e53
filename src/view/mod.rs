pub mod links;
pub mod markdown;
pub mod palette;
pub mod text;

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::search::SearchState;

pub use links::LinkTarget;
pub use palette::language_color;

pub const IDLE_TITLE: &str = "Ready to Explore";
pub const IDLE_HINT: &str =
    "Enter a GitHub username above to discover their profile and repositories";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Maps a search state onto exactly one of the idle, loading, error or result views.
pub fn render(state: &SearchState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(state)),
        OutputFormat::Markdown => Ok(markdown::render(state)),
        OutputFormat::Json => serde_json::to_string_pretty(state).map_err(Error::Serialization),
    }
}

/// "Jan 25, 2011"
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let profile = fixtures::profile();
        assert_eq!(format_date(&profile.created_at), "Jan 25, 2011");
    }

    #[test]
    fn test_render_json() {
        let json = render(&fixtures::success(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["profile"]["login"], "octocat");
        assert_eq!(value["repositories"].as_array().unwrap().len(), 2);
    }
}
