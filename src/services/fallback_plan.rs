use crate::models::trip::{
    Amount, DayPlan, Hotel, Itinerary, Recommendations, TouristPlace, TransportOption, TripPlan,
    TripRequest, Weather,
};

/// Budgets below this get a "consider homestays" warning.
pub const LOW_BUDGET_THRESHOLD: u64 = 10_000;
pub const LOW_BUDGET_WARNING: &str = "Budget is limited - consider homestays or hostels";

const CAR_BUDGET_SHARE: f64 = 0.15;
const BIKE_BUDGET_SHARE: f64 = 0.05;
const BUDGET_HOTEL_DIVISOR: f64 = 3.0;
const COMFORT_HOTEL_DIVISOR: f64 = 2.0;

/// Builds a plan purely from the request, used whenever the model's reply
/// can't be turned into a valid [`TripPlan`].
///
/// Deterministic: the same request always yields the same plan. A zero-day
/// request gets an empty itinerary and per-day figures computed as if the
/// trip were one day long.
pub fn fallback_plan(request: &TripRequest) -> TripPlan {
    let budget = request.budget;
    let days = request.duration_days;
    let per_day = budget as f64 / days.max(1) as f64;

    TripPlan {
        recommendations: Recommendations {
            tourist_places: vec![
                TouristPlace {
                    name: format!("{} City Center", request.destination_city),
                    description: "Explore the heart of the city with its vibrant markets and local culture".to_string(),
                    visit_duration: "3-4 hours".to_string(),
                    best_time: "Morning".to_string(),
                    entry_fee: Amount::from(0),
                },
                TouristPlace {
                    name: "Local Heritage Site".to_string(),
                    description: "Historical landmark showcasing the region's rich heritage".to_string(),
                    visit_duration: "2 hours".to_string(),
                    best_time: "Afternoon".to_string(),
                    entry_fee: Amount::from(50),
                },
            ],
            hotels: vec![
                Hotel {
                    name: "Budget Inn".to_string(),
                    price_per_night: round_amount(per_day / BUDGET_HOTEL_DIVISOR),
                    rating: 3.8,
                    amenities: strings(&["WiFi", "AC", "TV"]),
                    location: "City center".to_string(),
                },
                Hotel {
                    name: "Comfort Stay Hotel".to_string(),
                    price_per_night: round_amount(per_day / COMFORT_HOTEL_DIVISOR),
                    rating: 4.2,
                    amenities: strings(&["WiFi", "AC", "Breakfast", "Parking"]),
                    location: "Near main attractions".to_string(),
                },
            ],
            transport: vec![
                TransportOption {
                    mode: "car".to_string(),
                    estimated_cost: round_amount(budget as f64 * CAR_BUDGET_SHARE),
                    duration: "Travel time varies".to_string(),
                    recommendation: "Comfortable for families and groups".to_string(),
                },
                TransportOption {
                    mode: "bike".to_string(),
                    estimated_cost: round_amount(budget as f64 * BIKE_BUDGET_SHARE),
                    duration: "Faster in city traffic".to_string(),
                    recommendation: "Economical choice for solo travelers".to_string(),
                },
            ],
            warnings: if budget < LOW_BUDGET_THRESHOLD {
                vec![LOW_BUDGET_WARNING.to_string()]
            } else {
                Vec::new()
            },
            weather: Weather {
                condition: "Pleasant weather expected".to_string(),
                temp: "24-30°C".to_string(),
            },
        },
        itinerary: Itinerary {
            days: (0..days)
                .map(|index| fallback_day(index, days, round_amount(per_day)))
                .collect(),
            total_estimated_cost: Amount::from(budget),
        },
    }
}

fn fallback_day(index: u32, days: u32, estimated_cost: Amount) -> DayPlan {
    // Arrival is checked first, so a one-day trip is an arrival day.
    let (title, activities) = if index == 0 {
        (
            "Arrival Day".to_string(),
            strings(&[
                "Arrive and check into hotel",
                "Light exploration of nearby areas",
                "Dinner at local restaurant",
            ]),
        )
    } else if index == days - 1 {
        (
            "Departure Day".to_string(),
            strings(&[
                "Breakfast at hotel",
                "Last-minute shopping",
                "Check out and depart",
            ]),
        )
    } else {
        (
            format!("Exploration Day {}", index),
            strings(&[
                "Morning sightseeing",
                "Lunch at local eatery",
                "Afternoon attraction visit",
                "Evening leisure",
            ]),
        )
    };

    DayPlan {
        day: index + 1,
        title,
        activities,
        estimated_cost,
    }
}

fn round_amount(amount: f64) -> Amount {
    Amount(amount.round())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
