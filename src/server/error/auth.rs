use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored under the session's auth key.
    ///
    /// The request did not come from a logged in user. Results in 401 Unauthorized.
    #[error("User not found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// Results in 401 Unauthorized so the client logs in again.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(Uuid),

    /// User is authenticated but lacks the required permission.
    ///
    /// The string describes the attempted access and is only logged.
    /// Results in 403 Forbidden.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not logged in"
/// - `AccessDenied` → 403 Forbidden with "You are not the owner of this object"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: super::NOT_OWNER_MESSAGE.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
