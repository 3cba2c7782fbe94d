use std::fmt;
use std::sync::LazyLock;

use log::{info, warn};
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::errors::ServiceError;
use crate::models::trip::{Amount, TripPlan, TripRequest};
use crate::services::completion_service::CompletionService;
use crate::services::fallback_plan::fallback_plan;

const SYSTEM_PROMPT: &str = "You are an expert travel planner AI. Generate comprehensive, realistic travel recommendations based on the user's trip details.

Your recommendations should be:
- Budget-aware: Ensure all costs fit within the specified budget
- Traffic-optimized: Consider typical traffic conditions and travel times
- Locally relevant: Suggest popular and well-reviewed attractions, hotels, and transport options
- Day-wise organized: Create a logical day-by-day itinerary

IMPORTANT: Return ONLY valid JSON without any markdown formatting or code blocks. The response must be parseable JSON.";

const RESPONSE_TEMPLATE: &str = r#"{
  "recommendations": {
    "touristPlaces": [
      {
        "name": "Place Name",
        "description": "Brief description",
        "visitDuration": "2-3 hours",
        "bestTime": "Morning",
        "entryFee": 100
      }
    ],
    "hotels": [
      {
        "name": "Hotel Name",
        "pricePerNight": 2000,
        "rating": 4.5,
        "amenities": ["WiFi", "AC", "Breakfast"],
        "location": "Near city center"
      }
    ],
    "transport": [
      {
        "type": "car",
        "estimatedCost": 3000,
        "duration": "4-5 hours",
        "recommendation": "Best for family travel with luggage"
      }
    ],
    "warnings": ["Budget may be tight for luxury hotels", "Book transport in advance during peak season"],
    "weather": {
      "condition": "Sunny with mild temperatures expected",
      "temp": "25-32°C"
    }
  },
  "itinerary": {
    "days": [
      {
        "day": 1,
        "title": "Arrival & Local Exploration",
        "activities": ["Check-in at hotel", "Visit nearby market", "Evening at local attraction"],
        "estimatedCost": 3000
      }
    ],
    "totalEstimatedCost": 15000
  }
}"#;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\n?").expect("code fence pattern is valid"));

/// Why a model reply was not accepted as a plan.
#[derive(Debug)]
pub enum PlanRejection {
    Syntax(serde_json::Error),
    Schema(String),
    Invariant(String),
}

impl fmt::Display for PlanRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanRejection::Syntax(err) => write!(f, "not valid JSON: {}", err),
            PlanRejection::Schema(msg) => write!(f, "schema violation: {}", msg),
            PlanRejection::Invariant(msg) => write!(f, "invariant violation: {}", msg),
        }
    }
}

/// What the generator hands back: the model's reply exactly as parsed, or the
/// synthesized plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeneratedPlan {
    Model(Value),
    Fallback(TripPlan),
}

pub struct PlanGenerator {
    completions: CompletionService,
}

impl PlanGenerator {
    pub fn new(completions: CompletionService) -> Self {
        Self { completions }
    }

    /// Asks the model for a plan, substituting [`fallback_plan`] when the reply
    /// is unusable. Gateway failures are returned as errors, never synthesized.
    pub async fn generate_plan(&self, request: &TripRequest) -> Result<GeneratedPlan, ServiceError> {
        info!(
            "Generating trip plan {} -> {} ({} days, budget {}) with {}",
            request.origin_city,
            request.destination_city,
            request.duration_days,
            request.budget,
            self.completions.model()
        );

        let content = self
            .completions
            .complete(SYSTEM_PROMPT, &user_prompt(request))
            .await?
            .ok_or(ServiceError::EmptyCompletion)?;

        match parse_plan(&content, request) {
            Ok(plan) => Ok(GeneratedPlan::Model(plan)),
            Err(rejection) => {
                warn!("Failed to parse AI response ({}): {}", rejection, content);
                Ok(GeneratedPlan::Fallback(fallback_plan(request)))
            }
        }
    }
}

pub fn user_prompt(request: &TripRequest) -> String {
    format!(
        "Create a detailed travel plan for the following trip:

**Trip Details:**
- Departure City: {origin}
- Destination City: {destination}
- Duration: {days} days
- Total Budget: ₹{budget}

Please provide:
1. Top tourist attractions to visit
2. Budget-appropriate hotel recommendations
3. Transport options (bike, car, public transport) with costs
4. Day-wise itinerary with activities
5. Any warnings about budget, time constraints, or traffic

Return the response in this exact JSON structure:
{template}",
        origin = request.origin_city,
        destination = request.destination_city,
        days = request.duration_days,
        budget = group_thousands(request.budget),
        template = RESPONSE_TEMPLATE,
    )
}

/// Removes markdown code fences the model sometimes wraps JSON in.
pub fn strip_code_fences(content: &str) -> String {
    CODE_FENCE.replace_all(content, "").trim().to_string()
}

/// Parses a model reply, checking it against the [`TripPlan`] schema and the
/// invariants for `request`. The accepted reply is returned as parsed, extra
/// keys and number formatting included.
pub fn parse_plan(content: &str, request: &TripRequest) -> Result<Value, PlanRejection> {
    let cleaned = strip_code_fences(content);
    let value: Value = serde_json::from_str(&cleaned).map_err(PlanRejection::Syntax)?;

    let plan: TripPlan = serde_path_to_error::deserialize(&value)
        .map_err(|e| PlanRejection::Schema(format!("at {}: {}", e.path(), e.inner())))?;

    let expected = request.duration_days as usize;
    if plan.itinerary.days.len() != expected {
        return Err(PlanRejection::Invariant(format!(
            "expected {} itinerary days, got {}",
            expected,
            plan.itinerary.days.len()
        )));
    }
    if let Some(day) = plan.itinerary.days.iter().find(|day| day.day == 0) {
        return Err(PlanRejection::Invariant(format!(
            "day numbers start at 1, found day 0 titled {:?}",
            day.title
        )));
    }
    if let Some((field, amount)) = costs(&plan).find(|(_, amount)| !amount.is_valid()) {
        return Err(PlanRejection::Invariant(format!(
            "{} must be a non-negative amount, got {}",
            field, amount.0
        )));
    }

    Ok(value)
}

fn costs(plan: &TripPlan) -> impl Iterator<Item = (&'static str, Amount)> + '_ {
    let recommendations = &plan.recommendations;
    recommendations
        .tourist_places
        .iter()
        .map(|place| ("entryFee", place.entry_fee))
        .chain(
            recommendations
                .hotels
                .iter()
                .map(|hotel| ("pricePerNight", hotel.price_per_night)),
        )
        .chain(
            recommendations
                .transport
                .iter()
                .map(|option| ("estimatedCost", option.estimated_cost)),
        )
        .chain(
            plan.itinerary
                .days
                .iter()
                .map(|day| ("estimatedCost", day.estimated_cost)),
        )
        .chain(std::iter::once((
            "totalEstimatedCost",
            plan.itinerary.total_estimated_cost,
        )))
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
