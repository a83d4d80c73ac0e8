use anyhow::{bail, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

use sentinel::ApiKey;

/// Which completion API to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "gemini" | "google" => Ok(Self::Gemini),
            other => bail!("SENTINEL_PROVIDER must be 'openai' or 'gemini', got '{}'", other),
        }
    }
}

/// Scanner configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when no completion key is set at all.
    pub provider: Option<Provider>,
    pub openai_api_key: Option<ApiKey>,
    pub openai_base_url: Option<String>,
    pub google_api_key: Option<ApiKey>,
    pub model: Option<String>,
    pub tavily_api_key: Option<ApiKey>,
    pub rdap_base_url: Option<String>,
    pub extra_keywords: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let openai_api_key = var("OPENAI_API_KEY").map(ApiKey::from);
        let google_api_key = var("GOOGLE_API_KEY").map(ApiKey::from);

        let provider = match var("SENTINEL_PROVIDER") {
            Some(name) => Some(name.parse::<Provider>()?),
            None if google_api_key.is_some() => Some(Provider::Gemini),
            None if openai_api_key.is_some() => Some(Provider::OpenAi),
            None => None,
        };

        let extra_keywords = var("SENTINEL_EXTRA_KEYWORDS")
            .map(|list| {
                list.split(',')
                    .map(str::trim)
                    .filter(|phrase| !phrase.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            provider,
            openai_api_key,
            openai_base_url: var("OPENAI_BASE_URL"),
            google_api_key,
            model: var("SENTINEL_MODEL"),
            tavily_api_key: var("TAVILY_API_KEY").map(ApiKey::from),
            rdap_base_url: var("RDAP_BASE_URL"),
            extra_keywords,
        })
    }
}
