use colored::Colorize;

use crate::models::{Profile, RepositorySummary};
use crate::search::SearchState;
use crate::view::{format_date, language_color, IDLE_HINT, IDLE_TITLE};

pub fn render(state: &SearchState) -> String {
    match state {
        SearchState::Idle => format!("\n{}\n{}\n", IDLE_TITLE.bold(), IDLE_HINT.dimmed()),
        SearchState::Loading { username } => format!("Searching for {}...\n", username.bold()),
        SearchState::Error { message } => format!("\n{}\n", message.red().bold()),
        SearchState::Success {
            profile,
            repositories,
        } => {
            let mut output = format_profile(profile);
            if !repositories.is_empty() {
                output.push_str(&format!("\n{}\n", "Top Repositories".bold().underline()));
                for (i, repo) in repositories.iter().enumerate() {
                    output.push_str(&format_repository(i + 1, repo));
                }
            }
            output
        }
    }
}

fn format_profile(profile: &Profile) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "\n[{}] {}  {}\n",
        profile.initial().unwrap_or('?').to_string().reversed(),
        profile.display_name().bold().cyan(),
        format!("@{}", profile.login).dimmed()
    ));

    if let Some(ref bio) = profile.bio {
        output.push_str(&format!("{}\n", bio));
    }

    let mut facts = Vec::new();
    if let Some(ref location) = profile.location {
        facts.push(location.clone());
    }
    if let Some(ref company) = profile.company {
        facts.push(company.clone());
    }
    facts.push(format!("Joined {}", format_date(&profile.created_at)));
    output.push_str(&format!("{}\n", facts.join(" · ").dimmed()));

    output.push_str(&format!(
        "{} Repositories   {} Followers   {} Following\n",
        profile.public_repos.to_string().bold(),
        profile.followers.to_string().bold(),
        profile.following.to_string().bold()
    ));

    output.push_str(&format!("Profile: {}\n", profile.html_url));
    if let Some(website) = profile.website_url() {
        output.push_str(&format!("Website: {}\n", website));
    }

    output
}

fn format_repository(position: usize, repo: &RepositorySummary) -> String {
    let mut output = String::new();

    output.push_str(&format!("\n{:>2}. {}\n", position, repo.name.bold()));
    output.push_str(&format!("    {}\n", repo.description_or_default()));

    let mut stats = format!("★ {}  ⑂ {}", repo.stargazers_count, repo.forks_count);
    if let Some(ref language) = repo.language {
        stats.push_str(&format!("  {} {}", "●".color(language_color(language)), language));
    }
    stats.push_str(&format!(
        "  {}",
        format!("Updated {}", format_date(&repo.updated_at)).dimmed()
    ));
    output.push_str(&format!("    {}\n", stats));
    output.push_str(&format!("    {}\n", repo.html_url.dimmed()));

    output
}
