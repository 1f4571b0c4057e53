use crate::error::{Error, Result};
use std::env;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let raw = env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_api_url(&raw)
    }

    pub fn with_api_url(raw: &str) -> Result<Self> {
        let api_base_url = Url::parse(raw.trim())
            .map_err(|e| Error::Config(format!("invalid GITHUB_API_URL {:?}: {}", raw, e)))?;

        if api_base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "GITHUB_API_URL {:?} cannot be used as a base URL",
                raw
            )));
        }

        Ok(Self { api_base_url })
    }
}
