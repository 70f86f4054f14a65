//! Errors returned by roster operations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Rejections from signup/unregister/lookup.
///
/// These are ordinary validation outcomes; the `Display` text is the `detail`
/// message sent to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Activity is at maximum capacity")]
    CapacityExceeded,

    #[error("Student not found in this activity")]
    ParticipantNotFound,
}

impl ActivityError {
    /// HTTP status for this rejection.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound | Self::ParticipantNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyRegistered | Self::CapacityExceeded => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "detail": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
