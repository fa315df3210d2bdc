use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_MODEL: &str = "gpt-4.1-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // Completion service configuration
    #[serde(skip_serializing)]
    pub api_key: String,
    pub model: String,
    pub base_url: String,

    // Outbound request timeout, seconds
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY not set in environment"))?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,

            api_key,
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Config pointed at a local fake upstream, without touching process env.
    pub fn for_tests(base_url: &str) -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            base_url: base_url.to_string(),
            request_timeout_secs: 5,
        }
    }
}
