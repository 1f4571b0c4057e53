use crate::models::RepositorySummary;

/// Number of repository cards shown for a profile.
pub const TOP_REPOSITORY_COUNT: usize = 5;

/// Orders by star count, highest first, and keeps at most `TOP_REPOSITORY_COUNT`.
/// Ties keep their upstream order (most recently updated first).
pub fn top_by_stars(mut repos: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
    // sort_by is stable
    repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
    repos.truncate(TOP_REPOSITORY_COUNT);
    repos
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn repo(id: u64, stars: u32) -> RepositorySummary {
        RepositorySummary {
            id,
            name: format!("repo-{}", id),
            description: None,
            html_url: format!("https://github.com/octocat/repo-{}", id),
            stargazers_count: stars,
            forks_count: 0,
            language: None,
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_top_five_with_stable_ties() {
        let repos = [3, 10, 1, 10, 0, 7]
            .iter()
            .enumerate()
            .map(|(i, &stars)| repo(i as u64, stars))
            .collect();

        let top = top_by_stars(repos);

        assert_eq!(top.len(), 5);
        let stars: Vec<u32> = top.iter().map(|r| r.stargazers_count).collect();
        assert_eq!(stars, vec![10, 10, 7, 3, 1]);
        // the two 10-star repos keep their original relative order
        assert_eq!(top[0].id, 1);
        assert_eq!(top[1].id, 3);
    }

    #[test]
    fn test_short_and_empty_lists() {
        assert!(top_by_stars(Vec::new()).is_empty());

        let top = top_by_stars(vec![repo(1, 2), repo(2, 5)]);
        assert_eq!(top.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }
}
