use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body posted by the trip detail page's assistant widget.
///
/// Only `question` is required. The context is whatever the page has stored,
/// so it is kept as raw JSON and stringified when the prompt is built; a
/// number where a string was expected never stops the question being asked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantRequest {
    pub question: String,
    #[serde(flatten)]
    pub context: TripContext,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripContext {
    pub boarding_city: Value,
    pub destination: Value,
    pub duration: Value,
    pub budget: Value,
    pub recommendations: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantAnswer {
    pub answer: String,
}

impl AssistantAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}
