use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("Authentication credentials were not provided")]
    MissingToken,

    /// Bearer token is not known to the token validator.
    #[error("Invalid or revoked token")]
    InvalidToken,

    /// Username and password do not match a user.
    #[error("Invalid credentials for user '{0}'")]
    InvalidCredentials(String),

    /// Token resolved to a user ID that no longer exists.
    #[error("User {0} referenced by token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user attempted an action on a resource they do not own.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Description of the denied action, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `UserNotInDatabase` → 404 Not Found with "User not found"
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided",
            ),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
