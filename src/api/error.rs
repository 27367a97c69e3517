use actix_web::{
    dev::ServiceResponse,
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    web, HttpRequest, HttpResponse, ResponseError,
};
use serde_json::json;
use std::fmt::Display;
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use tracing::error;

use crate::api::validation::MessageError;
use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(Vec<String>),
    #[error(transparent)]
    InvalidMessage(#[from] MessageError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl ApiError {
    pub fn internal(message: impl Into<String>, detail: impl Display) -> Self {
        let message = message.into();
        let detail = detail.to_string();
        error!("{}: {}", message, detail);
        Self::Internal { message, detail }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidMessage(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            Self::Validation(errors) => json!({
                "success": false,
                "message": self.to_string(),
                "errors": errors,
            }),
            Self::InvalidMessage(e) => json!({
                "success": false,
                "message": e.to_string(),
                "reason": e.reason(),
            }),
            Self::BadRequest(message) | Self::NotFound(message) => json!({
                "success": false,
                "message": message,
            }),
            Self::Internal { message, detail } => json!({
                "success": false,
                "message": message,
                "error": detail,
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Locks a store, turning a poisoned lock into a 500 tagged with `context`.
pub fn lock<'a, T>(store: &'a Mutex<T>, context: &str) -> Result<MutexGuard<'a, T>, ApiError> {
    store.lock().map_err(|e| ApiError::internal(context, e))
}

pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid request body: {}", err)).into()
}

pub fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::BadRequest(format!("Invalid query string: {}", err)).into()
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "message": "Endpoint not found",
    }))
}

/// Replaces the body of every 500 with a generic envelope unless the server
/// runs in development mode.
pub fn redact_internal_errors<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, redact)
}

fn redact<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let development = res
        .request()
        .app_data::<web::Data<AppConfig>>()
        .map(|config| config.server.is_development())
        .unwrap_or(false);

    if development {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let (req, _) = res.into_parts();
    let generic = HttpResponse::InternalServerError().json(json!({
        "success": false,
        "message": "Something went wrong!",
        "error": "Internal server error",
    }));
    let res = ServiceResponse::new(req, generic).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
