use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::models::ApiError;

pub mod contact;
pub mod diagnostics;
pub mod health;

/// Unexpected failure, reported with its message wrapped.
pub fn server_error(message: impl Display) -> Response {
    tracing::error!("server error: {message}");
    error(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Server error: {message}"),
    )
}

fn error(code: StatusCode, detail: impl Serialize) -> Response {
    (code, Json(ApiError { detail })).into_response()
}
