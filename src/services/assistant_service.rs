use log::{error, warn};
use serde_json::Value;

use crate::errors::ServiceError;
use crate::models::assistant::TripContext;
use crate::services::completion_service::CompletionService;

pub const BUSY_REPLY: &str = "I'm a bit busy right now. Please try again in a moment.";
pub const TROUBLE_REPLY: &str = "Sorry, I'm having trouble right now. Please try again later.";
pub const UNPROCESSED_REPLY: &str = "I couldn't process that question.";

/// Answers free-form questions about a trip. Every failure becomes one of the
/// canned replies above; nothing is propagated to the caller.
pub struct TripAssistant {
    completions: CompletionService,
}

impl TripAssistant {
    pub fn new(completions: CompletionService) -> Self {
        Self { completions }
    }

    pub async fn answer(&self, question: &str, context: &TripContext) -> String {
        let system = format!(
            "You are a helpful AI travel assistant for Travello. Answer concisely (2-3 sentences max). Use the trip context to give personalized answers. Context: {}",
            context.summary()
        );

        match self.completions.complete(&system, question).await {
            Ok(Some(answer)) => answer,
            Ok(None) => UNPROCESSED_REPLY.to_string(),
            Err(ServiceError::RateLimited) => {
                warn!("Trip assistant rate limited by AI gateway");
                BUSY_REPLY.to_string()
            }
            Err(err) => {
                error!("Trip assistant error: {}", err);
                TROUBLE_REPLY.to_string()
            }
        }
    }
}

impl TripContext {
    /// Flattens the context into the few lines embedded in the system prompt.
    pub fn summary(&self) -> String {
        let weather = &self.recommendations["weather"];

        format!(
            "Trip: {} → {}, {} days, ₹{} budget.\nWeather: {}, {}.\nTourist places: {}.\nHotels: {}.",
            text_or(&self.boarding_city, "unknown"),
            text_or(&self.destination, "unknown"),
            text_or(&self.duration, "unknown"),
            text_or(&self.budget, "unknown"),
            text_or(&weather["condition"], "Unknown"),
            text_or(&weather["temp"], "N/A"),
            names_or_none(&self.recommendations["touristPlaces"]),
            names_or_none(&self.recommendations["hotels"]),
        )
    }
}

/// Renders any JSON value as prompt text; null and empty strings count as absent.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn text_or(value: &Value, default: &str) -> String {
    text(value).unwrap_or_else(|| default.to_string())
}

fn names_or_none(items: &Value) -> String {
    let names = items
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| text(&item["name"]))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    if names.is_empty() {
        "None listed".to_string()
    } else {
        names
    }
}
