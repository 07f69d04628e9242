use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::error::ErrorReport;

/// Body of an internal-error response. 400/404/409 responses carry their
/// message as plain text instead; only the 500 fallback is JSON, and success
/// bodies never contain an `error` key.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

const INTERNAL_MESSAGE: &str = "Internal Server Error";

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    report: ErrorReport,
}

impl ApiError {
    fn new(status: StatusCode, message: &'static str, detail: Option<String>) -> Self {
        let mut report = ErrorReport::from_message("infra::http::api", status, message);
        if let Some(detail) = detail {
            report.messages.push(detail);
        }
        Self {
            status,
            message,
            report,
        }
    }

    pub fn bad_request(message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, None)
    }

    pub fn not_found(message: &'static str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, None)
    }

    pub fn conflict(message: &'static str) -> Self {
        Self::new(StatusCode::CONFLICT, message, None)
    }

    /// Generic 500. The detail goes into the [`ErrorReport`] for server-side
    /// logging and never into the response body.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_MESSAGE,
            Some(detail.into()),
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = if self.status.is_server_error() {
            (
                self.status,
                Json(ApiErrorBody {
                    error: self.message.to_string(),
                }),
            )
                .into_response()
        } else {
            (self.status, self.message).into_response()
        };
        self.report.attach(&mut response);
        response
    }
}

/// `Json` wrapper whose rejection is a plain 400 instead of axum's 422, so a
/// payload like `{"unit_price": "abc"}` fails the same way a missing body
/// does. The decode failure itself is the not-a-number check for numeric
/// fields.
#[derive(axum::extract::FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "Invalid request payload.",
            Some(rejection.body_text()),
        )
    }
}
