use log::error;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::AppConfig;
use crate::errors::ServiceError;
use crate::models::completion::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Client for the hosted chat-completions gateway.
///
/// One request per call: no retries and no timeout beyond what the transport
/// applies. Rate limiting is reported to the caller, never retried here.
#[derive(Clone)]
pub struct CompletionService {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
}

impl CompletionService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.gateway_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a system/user conversation and returns the first completion's text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<Option<String>, ServiceError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => return Err(ServiceError::RateLimited),
            StatusCode::PAYMENT_REQUIRED => return Err(ServiceError::QuotaExhausted),
            _ if !status.is_success() => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                error!("AI gateway error: {} {}", status, error_text);
                return Err(ServiceError::Gateway {
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let body = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        Ok(completion.into_content())
    }
}
