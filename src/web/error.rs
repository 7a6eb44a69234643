use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Request errors reported to the client as HTTP 400 with a JSON body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    MissingField {
        message: &'static str,
        required: &'static [&'static str],
        missing: Vec<&'static str>,
    },

    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl ApiError {
    pub fn missing_message() -> Self {
        ApiError::MissingField {
            message: "Message is required",
            required: &["message"],
            missing: vec!["message"],
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::MissingField { message, required, missing } => json!({
                "error": message,
                "required": required,
                "missing": missing,
            }),
            ApiError::MalformedBody(detail) => json!({
                "error": "Malformed request body",
                "detail": detail,
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
