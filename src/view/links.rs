use crate::search::SearchState;

/// Something in the result view that can be opened in a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Profile,
    Website,
    /// 1-based position among the displayed repository cards.
    Repository(usize),
}

impl LinkTarget {
    /// Parses `profile`, `site` / `website`, or `repo N`.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split_whitespace();
        let target = match parts.next()? {
            "profile" => LinkTarget::Profile,
            "site" | "website" => LinkTarget::Website,
            "repo" | "repository" => LinkTarget::Repository(parts.next()?.parse().ok()?),
            _ => return None,
        };

        if parts.next().is_some() {
            return None;
        }
        Some(target)
    }

    /// The URL this target points at. Links only exist once a search succeeded.
    pub fn resolve(&self, state: &SearchState) -> Option<String> {
        let profile = state.profile()?;
        match self {
            LinkTarget::Profile => Some(profile.html_url.clone()),
            LinkTarget::Website => profile.website_url(),
            LinkTarget::Repository(n) => n
                .checked_sub(1)
                .and_then(|i| state.repositories().get(i))
                .map(|r| r.html_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::fixtures;

    #[test]
    fn test_parse() {
        assert_eq!(LinkTarget::parse("profile"), Some(LinkTarget::Profile));
        assert_eq!(LinkTarget::parse(" site "), Some(LinkTarget::Website));
        assert_eq!(LinkTarget::parse("repo 2"), Some(LinkTarget::Repository(2)));
        assert_eq!(LinkTarget::parse("repo"), None);
        assert_eq!(LinkTarget::parse("repo two"), None);
        assert_eq!(LinkTarget::parse("profile now"), None);
        assert_eq!(LinkTarget::parse(""), None);
    }

    #[test]
    fn test_resolve() {
        let state = fixtures::success();
        assert_eq!(
            LinkTarget::Profile.resolve(&state).as_deref(),
            Some("https://github.com/octocat")
        );
        assert_eq!(
            LinkTarget::Website.resolve(&state).as_deref(),
            Some("https://github.blog")
        );
        assert_eq!(
            LinkTarget::Repository(2).resolve(&state).as_deref(),
            Some("https://github.com/octocat/Spoon-Knife")
        );
        assert_eq!(LinkTarget::Repository(0).resolve(&state), None);
        assert_eq!(LinkTarget::Repository(3).resolve(&state), None);
    }

    #[test]
    fn test_no_links_without_results() {
        let state = SearchState::Error {
            message: "User not found".to_string(),
        };
        assert_eq!(LinkTarget::Profile.resolve(&state), None);
        assert_eq!(LinkTarget::Profile.resolve(&SearchState::Idle), None);
    }
}
