use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;

use crate::server::{
    error::{auth::AuthError, AppError},
    view::{
        self,
        error::{ErrorPage, ErrorPageProps},
    },
};

/// Error returned by handlers that serve HTML pages.
///
/// Client errors render the HTML error page instead of a JSON body. Redirects and
/// server errors fall through to `AppError::into_response()`.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::NotFound(message) => error_page(StatusCode::NOT_FOUND, message),
            AppError::Validation(err) => error_page(StatusCode::BAD_REQUEST, err.to_string()),
            AppError::AuthErr(AuthError::AccessDenied(user_id, reason)) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);

                error_page(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to do that.".to_string(),
                )
            }
            err => err.into_response(),
        }
    }
}

fn error_page(status: StatusCode, message: String) -> Response {
    let page = view::render(
        ErrorPage,
        ErrorPageProps {
            status: status.as_u16(),
            message,
        },
    );

    (status, page).into_response()
}
