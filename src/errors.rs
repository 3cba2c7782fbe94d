use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures surfaced to callers of the completion gateway.
///
/// Rate limiting and quota exhaustion keep their own statuses so a client can
/// tell "try again later" apart from "something broke".
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Usage limit reached. Please add credits to continue.")]
    QuotaExhausted,

    #[error("AI gateway error")]
    Gateway { status: u16 },

    #[error("AI gateway error")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed AI gateway response: {0}")]
    MalformedResponse(String),

    #[error("No content in AI response")]
    EmptyCompletion,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ServiceError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}
