use actix_web::{web, HttpResponse};
use log::error;

use crate::models::assistant::{AssistantAnswer, AssistantRequest};
use crate::services::assistant_service::{TripAssistant, TROUBLE_REPLY};

/*
    /api/trip-assistant

    Always answers 200; an unreadable body gets the same reply as a failed
    gateway call.
*/
pub async fn ask(assistant: web::Data<TripAssistant>, body: web::Bytes) -> HttpResponse {
    let request: AssistantRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            error!("Trip assistant error: invalid request body: {}", err);
            return HttpResponse::Ok().json(AssistantAnswer::new(TROUBLE_REPLY));
        }
    };

    let answer = assistant.answer(&request.question, &request.context).await;
    HttpResponse::Ok().json(AssistantAnswer::new(answer))
}
