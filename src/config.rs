use std::env;

use thiserror::Error;
use url::Url;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DEFAULT_GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not configured")]
    Missing(&'static str),

    #[error("AI_GATEWAY_URL is not a valid URL: {0}")]
    InvalidGatewayUrl(#[from] url::ParseError),
}

/// Process-wide settings, read once at startup and shared read-only with
/// every service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gateway_url: Url,
    pub api_key: String,
    pub model: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_blank("AI_GATEWAY_API_KEY").ok_or(ConfigError::Missing("AI_GATEWAY_API_KEY"))?;

        let gateway_url = non_blank("AI_GATEWAY_URL").unwrap_or_else(|| DEFAULT_GATEWAY_URL.to_string());
        let gateway_url = Url::parse(gateway_url.trim())?;

        let model = non_blank("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let host = non_blank("HOST").unwrap_or_else(|| HOST.to_string());
        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| PORT.to_string())
            .parse()
            .unwrap_or(PORT);

        Ok(Self {
            host,
            port,
            gateway_url,
            api_key: api_key.trim().to_string(),
            model,
        })
    }

    pub fn masked_api_key(&self) -> String {
        let key = &self.api_key;
        if key.chars().count() > 8 {
            let head: String = key.chars().take(4).collect();
            let tail: String = key.chars().skip(key.chars().count() - 4).collect();
            format!("{}***{}", head, tail)
        } else {
            "***".to_string()
        }
    }
}
