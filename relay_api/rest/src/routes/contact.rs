use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use relay_core_contact_contracts::{ContactFeatureService, ContactSendMessageError};
use serde::Serialize;

use super::error;
use crate::models::contact::ApiContactMessage;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/send-message", routing::post(send_message))
        .with_state(service)
}

#[derive(Serialize)]
struct SendMessageResponse {
    success: bool,
    message: &'static str,
}

async fn send_message(
    service: State<Arc<impl ContactFeatureService>>,
    message: Result<Json<ApiContactMessage>, JsonRejection>,
) -> Response {
    let Json(message) = match message {
        Ok(message) => message,
        Err(rejection) => return error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    match service.send_message(message.into()).await {
        Ok(()) => Json(SendMessageResponse {
            success: true,
            message: "Message sent to Telegram",
        })
        .into_response(),
        Err(ContactSendMessageError::Validation(err)) => {
            error(StatusCode::BAD_REQUEST, err.to_string())
        }
        Err(
            err @ (ContactSendMessageError::ChatNotConfigured
            | ContactSendMessageError::Delivery(_)),
        ) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to send message: {err:#}"),
        ),
    }
}
