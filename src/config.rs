use crate::types::Language;
use anyhow::{Context, Result, bail};
use std::env;

pub const ENDPOINT_VAR: &str = "SANDALWOOD_QUERY_ENDPOINT";
pub const SOUNDS_VAR: &str = "SANDALWOOD_SOUNDS_PATH";
pub const LANGUAGE_VAR: &str = "SANDALWOOD_LANGUAGE";

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/query";
const DEFAULT_SOUNDS_PATH: &str = "/sounds";

#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    pub query_endpoint: String,
    pub sounds_path: String,
    pub language: Language,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            query_endpoint: DEFAULT_ENDPOINT.to_string(),
            sounds_path: DEFAULT_SOUNDS_PATH.to_string(),
            language: Language::default(),
        }
    }
}

impl BotConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty()) {
            let endpoint = endpoint.trim().to_string();
            let url = reqwest::Url::parse(&endpoint)
                .with_context(|| format!("{ENDPOINT_VAR} is not a valid URL: {endpoint}"))?;
            if !matches!(url.scheme(), "http" | "https") {
                bail!("{ENDPOINT_VAR} must use http or https, got {}", url.scheme());
            }
            config.query_endpoint = endpoint;
        }

        if let Some(path) = lookup(SOUNDS_VAR).filter(|v| !v.trim().is_empty()) {
            config.sounds_path = path.trim().to_string();
        }

        if let Some(code) = lookup(LANGUAGE_VAR) {
            match Language::from_code(&code) {
                Some(language) => config.language = language,
                None => tracing::warn!(
                    "Unsupported {} value {:?}, using {}",
                    LANGUAGE_VAR,
                    code,
                    config.language
                ),
            }
        }

        Ok(config)
    }
}

/// Parse `KEY=VALUE` lines from a dotenv-style file. Blank lines and `#`
/// comments are skipped; matching surrounding quotes are stripped.
pub fn parse_env_lines(text: &str) -> Vec<(String, String)> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), unquote(value.trim()).to_string()))
        .filter(|(key, _)| !key.is_empty())
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
