use actix_web::{web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::config::AppConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
    checked_at: DateTime<Utc>,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

/*
    /health

    Reports what the process was configured with; the gateway itself is not
    called, so checking health never spends completion quota.
*/
pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checked_at: Utc::now(),
    };

    let gateway_result = check_ai_gateway(&config);
    health
        .services
        .insert("ai_gateway".to_string(), gateway_result.clone());

    if gateway_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_ai_gateway(config: &AppConfig) -> ServiceStatus {
    match config.gateway_url.host_str() {
        Some(host) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "AI gateway configured, Host: {}, Model: {}, Key: {}",
                host,
                config.model,
                config.masked_api_key()
            )),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some(format!(
                "AI gateway URL has no host: {}",
                config.gateway_url
            )),
        },
    }
}
