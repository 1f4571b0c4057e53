use crate::models::Profile;
use crate::search::SearchState;
use crate::view::{format_date, IDLE_HINT, IDLE_TITLE};

pub fn render(state: &SearchState) -> String {
    match state {
        SearchState::Idle => format!("## {}\n\n{}\n", IDLE_TITLE, IDLE_HINT),
        SearchState::Loading { username } => format!("_Searching for {}..._\n", username),
        SearchState::Error { message } => format!("> **Error:** {}\n", message),
        SearchState::Success {
            profile,
            repositories,
        } => {
            let mut output = format_profile(profile);

            if !repositories.is_empty() {
                output.push_str("\n## Top Repositories\n\n");
                output.push_str("| Repository | Description | Stars | Forks | Language | Updated |\n");
                output.push_str("|------------|-------------|-------|-------|----------|---------|\n");
                for repo in repositories {
                    output.push_str(&format!(
                        "| [{}]({}) | {} | {} | {} | {} | {} |\n",
                        repo.name,
                        repo.html_url,
                        escape_cell(repo.description_or_default()),
                        repo.stargazers_count,
                        repo.forks_count,
                        repo.language.as_deref().unwrap_or("-"),
                        format_date(&repo.updated_at)
                    ));
                }
            }

            output
        }
    }
}

fn format_profile(profile: &Profile) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# {} (@{})\n\n",
        profile.display_name(),
        profile.login
    ));

    if let Some(ref bio) = profile.bio {
        output.push_str(&format!("> {}\n\n", bio));
    }

    output.push_str("| Metric | Value |\n|--------|-------|\n");
    if let Some(ref location) = profile.location {
        output.push_str(&format!("| Location | {} |\n", escape_cell(location)));
    }
    if let Some(ref company) = profile.company {
        output.push_str(&format!("| Company | {} |\n", escape_cell(company)));
    }
    output.push_str(&format!("| Joined | {} |\n", format_date(&profile.created_at)));
    output.push_str(&format!("| Repositories | {} |\n", profile.public_repos));
    output.push_str(&format!("| Followers | {} |\n", profile.followers));
    output.push_str(&format!("| Following | {} |\n", profile.following));

    output.push_str(&format!("\n[View Profile]({})", profile.html_url));
    if let Some(website) = profile.website_url() {
        output.push_str(&format!(" · [Website]({})", website));
    }
    output.push('\n');

    output
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures;

    #[test]
    fn test_success_tables() {
        let output = render(&fixtures::success());
        assert!(output.starts_with("# The Octocat (@octocat)"));
        assert!(output.contains("| Location | San Francisco |"));
        assert!(!output.contains("| Company |"));
        assert!(output.contains("[Website](https://github.blog)"));
        assert!(output.contains(
            "| [Hello-World](https://github.com/octocat/Hello-World) | No description available | 2500 | 3 | - | May 1, 2024 |"
        ));
    }

    #[test]
    fn test_error_and_cells() {
        let output = render(&SearchState::Error {
            message: "User not found".to_string(),
        });
        assert_eq!(output, "> **Error:** User not found\n");
        assert_eq!(escape_cell("a|b\nc"), "a\\|b c");
    }
}
