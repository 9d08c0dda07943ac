use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UserError {
    /// Signup attempted with an email that already belongs to a user.
    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),
}

/// - `DuplicateEmail` → 409 Conflict
impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DuplicateEmail(_) => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
