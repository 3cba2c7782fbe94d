use actix_web::{web, HttpResponse};

use crate::errors::ServiceError;
use crate::models::trip::TripRequest;
use crate::services::plan_service::PlanGenerator;

/*
    /api/generate-trip-plan
*/
pub async fn generate(
    generator: web::Data<PlanGenerator>,
    input: web::Json<TripRequest>,
) -> Result<HttpResponse, ServiceError> {
    let request = input.into_inner();
    let plan = generator.generate_plan(&request).await?;

    Ok(HttpResponse::Ok().json(plan))
}
