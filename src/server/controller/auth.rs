use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::user::{LoginDto, SignupDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::SignupParams,
        service::user::UserService,
        state::AppState,
        view::{
            self,
            auth::{LoginPage, LoginPageProps, SignupPage, SignupPageProps},
        },
    },
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn signup_page() -> impl IntoResponse {
    view::render(SignupPage, SignupPageProps { message: None })
}

/// Registers a new user from the signup form.
///
/// # Returns
/// - `303 See Other` - Redirect to `/login` after signing up
/// - `400 Bad Request` - Signup page with the reason when a field is invalid or the
///   email is already registered
pub async fn signup(
    State(state): State<AppState>,
    Form(payload): Form<SignupDto>,
) -> Result<Response, AppError> {
    let params = match SignupParams::from_dto(payload) {
        Ok(params) => params,
        Err(err) => return Ok(signup_rejected(err.to_string())),
    };

    let service = UserService::new(&state.db);

    match service.signup(params).await {
        Ok(_) => Ok(Redirect::to("/login").into_response()),
        Err(AppError::UserErr(err)) => Ok(signup_rejected(err.to_string())),
        Err(err) => Err(err),
    }
}

fn signup_rejected(message: String) -> Response {
    tracing::debug!("Signup rejected: {}", message);

    let page = view::render(
        SignupPage,
        SignupPageProps {
            message: Some(message),
        },
    );

    (StatusCode::BAD_REQUEST, page).into_response()
}

/// Shows the login form, or sends logged-in users home.
pub async fn login_page(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    if AuthGuard::new(&state.db, &session)
        .current_user()
        .await?
        .is_some()
    {
        return Ok(Redirect::to("/").into_response());
    }

    Ok(view::render(LoginPage, LoginPageProps { message: None }).into_response())
}

/// Logs a user in with email and password.
///
/// # Returns
/// - `303 See Other` - Redirect to `/` with the session established
/// - `200 OK` - Login page with an error message when the credentials are wrong
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(payload): Form<LoginDto>,
) -> Result<Response, AppError> {
    let service = UserService::new(&state.db);

    let Some(user) = service.authenticate(&payload.email, &payload.password).await? else {
        tracing::debug!("Failed login attempt for {}", payload.email);

        let page = view::render(
            LoginPage,
            LoginPageProps {
                message: Some(INVALID_CREDENTIALS.to_string()),
            },
        );

        return Ok(page.into_response());
    };

    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok(Redirect::to("/").into_response())
}

pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    Redirect::to("/")
}
