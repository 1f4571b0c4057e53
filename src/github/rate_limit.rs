use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

/// Snapshot of the `x-ratelimit-*` headers on a response.
///
/// Only used for diagnostics. Requests are never delayed or retried based on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub limit: Option<u32>,
    pub remaining: u32,
    pub reset_at: Option<DateTime<Utc>>,
}

impl RateLimitStatus {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let remaining = header_number::<u32>(headers, "x-ratelimit-remaining")?;
        let limit = header_number::<u32>(headers, "x-ratelimit-limit");
        let reset_at = header_number::<i64>(headers, "x-ratelimit-reset")
            .and_then(|secs| DateTime::from_timestamp(secs, 0));

        Some(Self {
            limit,
            remaining,
            reset_at,
        })
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("60"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("0"));
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));

        let status = RateLimitStatus::from_headers(&headers).unwrap();
        assert_eq!(status.limit, Some(60));
        assert!(status.is_exhausted());
        assert_eq!(status.reset_at.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_missing_remaining_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-limit", HeaderValue::from_static("60"));
        assert_eq!(RateLimitStatus::from_headers(&headers), None);
    }
}
