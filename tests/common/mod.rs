use std::net::TcpListener;

use actix_web::{web, App};
use mockito::{Mock, ServerGuard};
use serde_json::{json, Value};

use travello_api::config::AppConfig;
use travello_api::middleware::cors::cors;
use travello_api::routes;
use travello_api::services::assistant_service::TripAssistant;
use travello_api::services::completion_service::CompletionService;
use travello_api::services::plan_service::PlanGenerator;

pub const TEST_API_KEY: &str = "test-gateway-key-0001";
pub const TEST_MODEL: &str = "test/travel-model";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// A mock AI gateway plus the configuration pointing the app at it.
pub struct TestApp {
    pub gateway: ServerGuard,
    pub config: AppConfig,
}

impl TestApp {
    pub async fn new() -> Self {
        let gateway = mockito::Server::new_async().await;
        let gateway_url = format!("{}{}", gateway.url(), COMPLETIONS_PATH);
        let config = test_config(&gateway_url);

        Self { gateway, config }
    }

    /// Points the app somewhere other than the mock gateway, which stays
    /// idle.
    pub async fn with_gateway_url(gateway_url: &str) -> Self {
        let gateway = mockito::Server::new_async().await;
        let config = test_config(gateway_url);

        Self { gateway, config }
    }

    pub fn create_app(&self) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let completions = CompletionService::new(&self.config);

        App::new()
            .wrap(cors())
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(PlanGenerator::new(completions.clone())))
            .app_data(web::Data::new(TripAssistant::new(completions)))
            .configure(routes::configure)
    }

    /// Gateway replies 200 with `content` as the first choice.
    pub async fn mock_completion(&mut self, content: &str) -> Mock {
        self.mock_completion_body(completion_body(content)).await
    }

    pub async fn mock_completion_body(&mut self, body: Value) -> Mock {
        self.gateway
            .mock("POST", COMPLETIONS_PATH)
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    pub async fn mock_status(&mut self, status: usize) -> Mock {
        self.gateway
            .mock("POST", COMPLETIONS_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": { "message": "gateway says no" } }).to_string())
            .create_async()
            .await
    }
}

fn test_config(gateway_url: &str) -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "AI_GATEWAY_API_KEY" => Some(TEST_API_KEY.to_string()),
        "AI_GATEWAY_URL" => Some(gateway_url.to_string()),
        "AI_MODEL" => Some(TEST_MODEL.to_string()),
        _ => None,
    })
    .expect("test configuration is valid")
}

/// A gateway URL on a local port nothing is listening on.
pub fn unreachable_gateway_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind an ephemeral port");
    let port = listener.local_addr().expect("listener has an address").port();
    drop(listener);

    format!("http://127.0.0.1:{}{}", port, COMPLETIONS_PATH)
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

pub fn trip_request(duration: u32, budget: u64) -> Value {
    json!({
        "boarding_city": "Mumbai",
        "destination_city": "Pune",
        "duration": duration,
        "budget": budget
    })
}

/// A plan in the exact shape the model is asked for.
pub fn model_plan(days: u32, total: u64) -> Value {
    let days: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "day": day,
                "title": format!("Day {} in Pune", day),
                "activities": ["Visit Aga Khan Palace", "Dinner on FC Road"],
                "estimatedCost": 4000
            })
        })
        .collect();

    json!({
        "recommendations": {
            "touristPlaces": [{
                "name": "Aga Khan Palace",
                "description": "Historic palace and memorial",
                "visitDuration": "2 hours",
                "bestTime": "Morning",
                "entryFee": 25
            }],
            "hotels": [{
                "name": "Hotel Deccan Rendezvous",
                "pricePerNight": 3200,
                "rating": 4.3,
                "amenities": ["WiFi", "AC", "Breakfast"],
                "location": "Deccan Gymkhana"
            }],
            "transport": [{
                "type": "car",
                "estimatedCost": 2800,
                "duration": "3-4 hours",
                "recommendation": "Take the expressway early to avoid traffic"
            }],
            "warnings": ["Weekend traffic on the expressway"],
            "weather": { "condition": "Warm and dry", "temp": "22-34°C" }
        },
        "itinerary": {
            "days": days,
            "totalEstimatedCost": total
        }
    })
}
