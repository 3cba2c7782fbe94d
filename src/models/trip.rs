use serde::{Deserialize, Serialize, Serializer};

/// Trip parameters posted by the planning page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TripRequest {
    #[serde(rename = "boarding_city")]
    pub origin_city: String,
    pub destination_city: String,
    #[serde(rename = "duration")]
    pub duration_days: u32,
    pub budget: u64,
}

/// A cost in the trip currency. Models may quote fractional amounts, so any
/// number is accepted; whole amounts are written back as integers.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub f64);

impl Amount {
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl From<u64> for Amount {
    fn from(amount: u64) -> Self {
        Amount(amount as f64)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0 >= 0.0 && self.0 <= u64::MAX as f64 {
            serializer.serialize_u64(self.0 as u64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TripPlan {
    pub recommendations: Recommendations,
    pub itinerary: Itinerary,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub tourist_places: Vec<TouristPlace>,
    pub hotels: Vec<Hotel>,
    pub transport: Vec<TransportOption>,
    pub warnings: Vec<String>,
    pub weather: Weather,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristPlace {
    pub name: String,
    pub description: String,
    pub visit_duration: String,
    pub best_time: String,
    pub entry_fee: Amount,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub name: String,
    pub price_per_night: Amount,
    pub rating: f64,
    pub amenities: Vec<String>,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    #[serde(rename = "type")]
    pub mode: String,
    pub estimated_cost: Amount,
    pub duration: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Weather {
    pub condition: String,
    pub temp: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub days: Vec<DayPlan>,
    pub total_estimated_cost: Amount,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub title: String,
    pub activities: Vec<String>,
    pub estimated_cost: Amount,
}
