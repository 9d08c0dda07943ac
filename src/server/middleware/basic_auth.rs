use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::session::AuthSession, service::user::UserService,
    state::AppState,
};

/// Logs in requests that carry `Authorization: Basic base64(email:password)`.
///
/// Valid credentials store the user in the session before the handler runs, so
/// scripted clients can call login-protected routes without a cookie. Switching the
/// session to a different user cycles the session ID. Missing or invalid credentials
/// leave the request untouched.
pub async fn basic_auth(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_basic_credentials);

    if let Some((email, password)) = credentials {
        let user_service = UserService::new(&state.db);

        match user_service.authenticate(&email, &password).await? {
            Some(user) => {
                let auth_session = AuthSession::new(&session);

                // New identity on this session gets a fresh ID, as on form login
                if auth_session.get_user_id().await? != Some(user.id) {
                    session.cycle_id().await?;
                    auth_session.set_user_id(user.id).await?;
                }
            }
            None => tracing::debug!("Ignoring invalid basic credentials for {}", email),
        }
    }

    Ok(next.run(request).await)
}

/// Decodes the `email:password` pair of a Basic authorization header value.
pub fn parse_basic_credentials(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;

    let (email, password) = decoded.split_once(':')?;

    Some((email.to_string(), password.to_string()))
}
