use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use travello_api::config::AppConfig;
use travello_api::middleware::cors::cors;
use travello_api::routes;
use travello_api::services::assistant_service::TripAssistant;
use travello_api::services::completion_service::CompletionService;
use travello_api::services::plan_service::PlanGenerator;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
        }
    };
    info!(
        "AI gateway: {} (model {}, key {})",
        config.gateway_url,
        config.model,
        config.masked_api_key()
    );

    let completions = CompletionService::new(&config);
    let generator = web::Data::new(PlanGenerator::new(completions.clone()));
    let assistant = web::Data::new(TripAssistant::new(completions));

    let bind = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    info!("Starting HTTP server on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(config.clone())
            .app_data(generator.clone())
            .app_data(assistant.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
