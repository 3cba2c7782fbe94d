use actix_web::{error, http::Method, web, HttpRequest, HttpResponse};

use crate::errors::ErrorBody;

pub mod health;
pub mod trip_assistant;
pub mod trip_plan;

/// Registers every route; shared by the binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api")
                .app_data(json_config())
                .service(
                    web::resource("/generate-trip-plan")
                        .route(web::post().to(trip_plan::generate))
                        .route(web::method(Method::OPTIONS).to(preflight)),
                )
                .service(
                    web::resource("/trip-assistant")
                        .route(web::post().to(trip_assistant::ask))
                        .route(web::method(Method::OPTIONS).to(preflight)),
                ),
        );
}

/// Answers `OPTIONS` requests that the CORS middleware passes through.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        let message = format!("Invalid request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorBody::new(message));
        error::InternalError::from_response(err, response).into()
    })
}
