use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// Either nobody logged in, or the session refers to a user that has since been
    /// deleted. Results in a redirect to the login page.
    #[error("Login required")]
    LoginRequired,

    /// The session user does not own the resource they tried to modify.
    ///
    /// # Fields
    /// - ID of the user attempting the operation
    /// - Description of the attempted operation, logged server-side
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `LoginRequired` → redirect to `/login`
/// - `AccessDenied` → 403 Forbidden with a generic message; details are logged at debug level
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::LoginRequired => Redirect::to("/login").into_response(),
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to do that.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
